#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::must_use_candidate)]

// Публичные модули
pub mod config;  // пороги сегментации, загрузка из TOML / источника настроек
pub mod core;    // общие типы (GrayImage, Plate) и ошибки
pub mod graph;   // профиль, интервалы, сегментатор
pub mod pgm;     // PGM P5 для демо и тестов
pub mod prelude; // удобные re-export'ы
pub mod synth;   // синтетический знак для демо/тестов/бенчей

// Реэкспорт базовых типов в корень
pub use crate::config::{SegmentOptions, Thresholds};
pub use crate::core::error::{ConfigError, SegmentError};
pub use crate::core::types::{GrayImage, LumaImage, Plate};
pub use crate::graph::{segment, PlateSegmenter, Profile, Region, Segmentation};

/// One-shot: картинка знака → отрезки символов с параметрами по умолчанию.
#[inline]
pub fn segment_plate(img: &GrayImage<'_>) -> Result<Vec<Region>, SegmentError> {
    PlateSegmenter::default()
        .segment_image(img)
        .map(|s| s.characters)
}
