//! Configuration module for the chartbot application.

pub mod analysis;
pub mod app;

mod debug; // Private: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod ocr;
pub mod persistence;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig, BiasKeywords, LevelSettings};
pub use app::{APP, AppConfig};
pub use ocr::{OCR, OcrConfig};
pub use persistence::{PERSISTENCE, PersistenceConfig};
