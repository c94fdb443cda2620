use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::AnalysisReport;
use crate::chart::display_name;
use crate::config::OCR;
use crate::ocr::{OcrEngine, locate_tesseract};

use super::messages::AnalysisOutcome;

/// OCR + heuristics pipeline. Cheap to clone so a copy can move onto a worker thread.
#[derive(Debug, Clone)]
pub struct ChartAnalyzer {
    engine: Option<OcrEngine>,
    language: String,
}

impl Default for ChartAnalyzer {
    fn default() -> Self {
        Self::new(None, OCR.default_language)
    }
}

impl ChartAnalyzer {
    pub fn new(engine: Option<OcrEngine>, language: impl Into<String>) -> Self {
        Self {
            engine,
            language: language.into(),
        }
    }

    /// Look for tesseract (override first) and build an analyzer around whatever was found.
    pub fn discover(override_path: Option<&Path>, language: impl Into<String>) -> Self {
        Self::new(locate_tesseract(override_path), language)
    }

    pub fn engine(&self) -> Option<&OcrEngine> {
        self.engine.as_ref()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// OCR text for `image`, or empty when the engine is missing or fails.
    pub fn read_text(&self, image: &Path) -> String {
        let Some(engine) = self.engine.as_ref().filter(|e| e.is_available()) else {
            return String::new();
        };

        match engine.recognize(image, &self.language) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("⚠️  OCR failed for {:?}: {}", image, e);
                String::new()
            }
        }
    }

    /// Heuristics only, for text that was obtained elsewhere.
    pub fn analyze_text(&self, file_name: impl Into<String>, text: String) -> AnalysisReport {
        let engine_path = self.engine.as_ref().map(|e| e.executable().to_path_buf());
        AnalysisReport::from_text(file_name, engine_path, text)
    }

    /// Full blocking run: OCR the image, then classify and derive levels.
    pub fn analyze(&self, image: &Path) -> AnalysisOutcome {
        let start = Instant::now();

        let text = self.read_text(image);
        let report = self.analyze_text(display_name(image), text);
        let elapsed = start.elapsed();

        log::info!(
            "Analyzed {} in {:?}: bias={}, levels={}",
            report.file_name,
            elapsed,
            report.bias.name(),
            if report.levels.is_some() { "yes" } else { "no" }
        );

        AnalysisOutcome {
            image_path: image.to_path_buf(),
            report: Arc::new(report),
            elapsed,
        }
    }
}
