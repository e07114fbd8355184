// src/core/types.rs
//
// Общие типы изображения номерного знака, независимые от алгоритма сегментации.

use crate::core::error::{Result, SegmentError};

/// Простое представление градаций серого.
/// Буфер `data`: построчно (row-major), 8 бит на пиксель.
#[derive(Clone, Copy, Debug)]
pub struct GrayImage<'a> {
    pub data: &'a [u8],
    pub width: usize,
    pub height: usize,
}

impl<'a> GrayImage<'a> {
    /// Буфер должен покрывать `width * height` пикселей; индексирующие
    /// методы ниже на это полагаются.
    pub fn validate(&self) -> Result<()> {
        match self.width.checked_mul(self.height) {
            Some(need) if need <= self.data.len() => Ok(()),
            _ => Err(SegmentError::MalformedImage {
                width: self.width,
                height: self.height,
                len: self.data.len(),
            }),
        }
    }

    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    #[inline]
    pub fn col<'b>(&self, x: usize, buf: &'b mut Vec<u8>) -> &'b [u8] {
        buf.clear();
        buf.reserve(self.height);
        for y in 0..self.height {
            buf.push(self.data[y * self.width + x]);
        }
        &buf[..]
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Яркость пикселя в диапазоне 0..=1.
    #[inline]
    pub fn brightness(&self, x: usize, y: usize) -> f32 {
        f32::from(self.pixel(x, y)) / 255.0
    }
}

/// LumaImage: «владельческая» картинка знака.
#[derive(Clone, Debug)]
pub struct LumaImage {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl LumaImage {
    #[inline]
    pub fn as_gray(&self) -> GrayImage<'_> {
        GrayImage {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }
}

/// Позволяем делать `.into()` из GrayImage в LumaImage (копия буфера).
impl<'a> From<GrayImage<'a>> for LumaImage {
    #[inline]
    fn from(g: GrayImage<'a>) -> Self {
        Self {
            data: g.data.to_vec(),
            width: g.width,
            height: g.height,
        }
    }
}

/// Знак, к которому относится профиль. Сегментатору нужна только его высота
/// в пикселях: промежуток между символами не может быть шире высоты знака.
pub trait Plate {
    fn height(&self) -> usize;
}

impl Plate for GrayImage<'_> {
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
}

impl Plate for LumaImage {
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
}

/// «Голая» высота: удобно в тестах и когда картинки под рукой нет.
impl Plate for usize {
    #[inline]
    fn height(&self) -> usize {
        *self
    }
}
