//! Command-line rendition of the analysis: same pipeline, report on stdout.

use anyhow::{Context, Result};
use std::path::Path;

use crate::chart::ChartImage;
use crate::engine::ChartAnalyzer;

/// Validate the image, run the analysis and return the text to print.
///
/// Unlike the GUI, a chart that fails to decode is an error here.
pub fn run_headless(analyzer: &ChartAnalyzer, image: &Path, json: bool) -> Result<String> {
    let chart = ChartImage::load(image)
        .with_context(|| format!("Failed to load chart image {:?}", image))?;

    let outcome = analyzer.analyze(chart.path());

    if json {
        serde_json::to_string_pretty(outcome.report.as_ref())
            .context("Failed to serialize analysis report")
    } else {
        Ok(outcome.report.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_chart(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("chartbot_headless_{}_{}", std::process::id(), name));
        image::RgbImage::from_pixel(8, 8, image::Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_text_report_without_engine() {
        let path = temp_chart("blank.png");
        let output = run_headless(&ChartAnalyzer::default(), &path, false).unwrap();
        fs::remove_file(&path).ok();

        assert!(output.starts_with(&format!(
            "File: chartbot_headless_{}_blank.png",
            std::process::id()
        )));
        assert!(output.contains("Tesseract: not found"));
        assert!(output.contains("Could not infer numeric levels from OCR."));
        assert!(output.ends_with("(empty)"));
    }

    #[test]
    fn test_json_report_without_engine() {
        let path = temp_chart("blank_json.bmp");
        let output = run_headless(&ChartAnalyzer::default(), &path, true).unwrap();
        fs::remove_file(&path).ok();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["bias"], "Neutral");
        assert_eq!(value["ocr_text"], "");
    }

    #[test]
    fn test_corrupt_image_is_an_error() {
        let path = std::env::temp_dir().join(format!("chartbot_headless_{}_bad.jpg", std::process::id()));
        fs::write(&path, b"garbage").unwrap();
        let err = run_headless(&ChartAnalyzer::default(), &path, false).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(format!("{:#}", err).contains("Failed to load chart image"));
    }
}
