#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod chart;
pub mod config;
pub mod engine;
pub mod headless;
pub mod ocr;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{AnalysisReport, Bias, LevelTriple, classify_bias, parse_levels};
pub use chart::ChartImage;
pub use engine::ChartAnalyzer;
pub use headless::run_headless;
pub use ui::ChartBotApp;

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Reads a chart screenshot with OCR and suggests a bias and levels (educational only)", long_about = None)]
pub struct Cli {
    /// Chart image to preload (GUI) or analyze (--headless)
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Print the report to stdout instead of opening a window
    #[arg(long, default_value_t = false, requires = "image")]
    pub headless: bool,

    /// Emit the report as JSON (headless only)
    #[arg(long, default_value_t = false, requires = "headless")]
    pub json: bool,

    /// Tesseract executable to try before the built-in locations
    #[arg(long, value_name = "PATH")]
    pub tesseract: Option<PathBuf>,

    /// OCR language code passed to tesseract
    #[arg(long, default_value_t = config::OCR.default_language.to_string())]
    pub lang: String,
}

impl Cli {
    pub fn analyzer(&self) -> ChartAnalyzer {
        ChartAnalyzer::discover(self.tesseract.as_deref(), self.lang.clone())
    }
}

/// Main application entry point - creates the GUI app
pub fn run_app(
    cc: &eframe::CreationContext,
    analyzer: ChartAnalyzer,
    initial_image: Option<PathBuf>,
) -> Box<dyn eframe::App> {
    let app = ui::ChartBotApp::new(cc, analyzer, initial_image);
    Box::new(app)
}
