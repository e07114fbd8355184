//! Проекции картинки знака в профиль.
//!
//! Символы тёмные на светлом фоне, поэтому промежутки между ними: это
//! светлые столбцы, т.е. пики суммарной яркости по столбцу.

use crate::core::types::GrayImage;
use crate::graph::profile::Profile;

fn brightness_sum(px: &[u8]) -> f32 {
    px.iter().map(|&v| f32::from(v) / 255.0).sum()
}

/// Для каждого столбца `x`: сумма яркостей (0..=1) по всем строкам.
///
/// # Panics
/// Если буфер короче `width * height` (см. [`GrayImage::validate`]).
pub fn column_profile(img: &GrayImage<'_>) -> Profile {
    let mut buf = Vec::with_capacity(img.height);
    (0..img.width)
        .map(|x| brightness_sum(img.col(x, &mut buf)))
        .collect()
}

/// Ортогональная проекция: сумма яркостей по каждой строке.
///
/// # Panics
/// Как у [`column_profile`].
pub fn row_profile(img: &GrayImage<'_>) -> Profile {
    (0..img.height)
        .map(|y| brightness_sum(img.row(y)))
        .collect()
}
