use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::analysis::AnalysisReport;

/// What a background analysis hands back to the UI.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub image_path: PathBuf,
    pub report: Arc<AnalysisReport>,
    pub elapsed: Duration,
}
