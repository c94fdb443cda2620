pub mod core;
pub mod messages;

// Re-export key components
pub use self::core::ChartAnalyzer;
pub use messages::AnalysisOutcome;
