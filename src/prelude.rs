//! `use plategraph::prelude::*;`: всё, что нужно для типичного прогона.

pub use crate::config::{PropertySource, SegmentOptions, Thresholds};
pub use crate::core::error::{ConfigError, SegmentError};
pub use crate::core::types::{GrayImage, LumaImage, Plate};
pub use crate::graph::{
    characters_from_gaps, column_profile, find_gaps, row_profile, segment, PlateSegmenter, Profile,
    Region, Segmentation,
};
