//! Профиль знака и поиск промежутков между символами.

pub mod profile;
pub mod project;
pub mod region;
pub mod segment;

pub use profile::Profile;
pub use project::{column_profile, row_profile};
pub use region::{left_to_right, order_left_to_right, Region};
pub use segment::{characters_from_gaps, find_gaps, segment, PlateSegmenter, Segmentation};
