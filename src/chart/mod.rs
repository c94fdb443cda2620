pub mod chart_image;

pub use chart_image::{ChartImage, ChartLoadError, display_name, has_supported_extension};
