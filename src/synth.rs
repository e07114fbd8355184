//! Синтетический знак для демо, тестов и бенчей: тёмные прямоугольники-«символы»
//! на светлом фоне, разделённые светлыми промежутками.

use std::ops::Range;

use crate::core::types::LumaImage;

pub const BACKGROUND: u8 = 230;
pub const INK: u8 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlateLayout {
    /// Число символов.
    pub glyphs: usize,
    /// Ширина символа, px.
    pub glyph_width: usize,
    /// Светлый промежуток между символами, px.
    pub gap: usize,
    /// Светлые поля слева и справа, px.
    pub margin: usize,
    /// Высота знака, px.
    pub height: usize,
    /// Светлые поля сверху и снизу, px.
    pub border: usize,
}

impl Default for PlateLayout {
    fn default() -> Self {
        Self {
            glyphs: 7,
            glyph_width: 8,
            gap: 3,
            margin: 5,
            height: 24,
            border: 3,
        }
    }
}

impl PlateLayout {
    pub fn width(&self) -> usize {
        2 * self.margin + self.glyphs * self.glyph_width + self.glyphs.saturating_sub(1) * self.gap
    }

    /// Столбцы `i`-го символа.
    pub fn glyph_columns(&self, i: usize) -> Range<usize> {
        let start = self.margin + i * (self.glyph_width + self.gap);
        start..start + self.glyph_width
    }

    pub fn render(&self) -> LumaImage {
        let width = self.width();
        let mut data = vec![BACKGROUND; width * self.height];
        let rows = self.border..self.height.saturating_sub(self.border);
        for i in 0..self.glyphs {
            for y in rows.clone() {
                let line = &mut data[y * width..(y + 1) * width];
                line[self.glyph_columns(i)].fill(INK);
            }
        }
        LumaImage { data, width, height: self.height }
    }
}
