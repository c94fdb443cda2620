use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::analysis::bias::{Bias, classify_bias};
use crate::analysis::levels::{LevelTriple, parse_levels};
use crate::config::OCR;

/// Everything one analysis run produced, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub file_name: String,
    /// `None` when no tesseract was found
    pub engine_path: Option<PathBuf>,
    pub bias: Bias,
    pub levels: Option<LevelTriple>,
    pub ocr_text: String,
}

impl AnalysisReport {
    /// Runs both heuristics over `ocr_text`.
    pub fn from_text(
        file_name: impl Into<String>,
        engine_path: Option<PathBuf>,
        ocr_text: String,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            engine_path,
            bias: classify_bias(&ocr_text),
            levels: parse_levels(&ocr_text),
            ocr_text,
        }
    }

    pub fn engine_status(&self) -> String {
        engine_status(self.engine_path.as_ref())
    }

    /// Leading `OCR.preview_chars` characters of the raw text.
    pub fn ocr_preview(&self) -> &str {
        truncate_chars(&self.ocr_text, OCR.preview_chars)
    }

    /// The plain-text report block shown in the output area and printed headless.
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("File: {}", self.file_name),
            format!("Tesseract: {}", self.engine_status()),
            format!("Bias: {}", self.bias),
            String::new(),
        ];

        match &self.levels {
            Some(levels) => {
                lines.push(format!("Suggested Entry: {:.4}", levels.entry));
                lines.push(format!("Take Profit:     {:.4}", levels.take_profit));
                lines.push(format!("Stop Loss:       {:.4}", levels.stop_loss));
            }
            None => lines.push("Could not infer numeric levels from OCR.".to_string()),
        }

        lines.push(String::new());
        lines.push("OCR Preview:".to_string());
        let preview = self.ocr_preview();
        lines.push(if preview.is_empty() {
            "(empty)".to_string()
        } else {
            preview.to_string()
        });

        lines.join("\n")
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// "not found" or the engine path, as shown in reports and the status bar.
pub fn engine_status(path: Option<&PathBuf>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "not found".to_string())
}

/// Cut `text` after `max_chars` characters, never inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
