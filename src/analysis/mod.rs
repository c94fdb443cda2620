pub mod bias;
pub mod levels;
pub mod report;

pub use bias::{Bias, classify_bias};
pub use levels::{LevelTriple, extract_numbers, parse_levels};
pub use report::AnalysisReport;
