use chrono::{DateTime, Local};
use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::analysis::{AnalysisReport, Bias};
use crate::chart::{ChartImage, display_name};
use crate::config::APP;
use crate::engine::{AnalysisOutcome, ChartAnalyzer};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// Analyze was requested before a chart was loaded
    NoImageSelected,
    /// The chosen file could not be decoded
    ImageLoad(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoImageSelected => write!(f, "{}", UI_TEXT.no_image_body),
            AppError::ImageLoad(msg) => write!(f, "Image load failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn title(&self) -> &'static str {
        match self {
            AppError::NoImageSelected => UI_TEXT.no_image_title,
            AppError::ImageLoad(_) => UI_TEXT.image_load_failed,
        }
    }
}

/// What the preview area currently shows.
#[derive(Default)]
pub(super) enum PreviewState {
    #[default]
    Empty,
    Loaded {
        chart: ChartImage,
        // Uploaded lazily on the first frame that has a Context
        texture: Option<egui::TextureHandle>,
    },
    Failed(AppError),
}

/// One finished analysis in this session.
#[derive(Clone)]
pub(super) struct HistoryEntry {
    pub at: DateTime<Local>,
    /// Full path of the analyzed chart; the report only keeps its file name
    pub image_path: PathBuf,
    pub report: Arc<AnalysisReport>,
    pub elapsed: Duration,
}

impl HistoryEntry {
    pub fn bias(&self) -> Bias {
        self.report.bias
    }

    pub fn entry_level(&self) -> Option<f64> {
        self.report.levels.map(|l| l.entry)
    }
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct ChartBotApp {
    // Persisted UI preferences
    pub(super) last_directory: Option<PathBuf>,
    pub(super) show_history: bool,

    // Runtime-only state
    #[serde(skip)]
    pub(super) analyzer: ChartAnalyzer,
    #[serde(skip)]
    pub(super) preview: PreviewState,
    /// Set only when the preview decoded successfully
    #[serde(skip)]
    pub(super) image_path: Option<PathBuf>,
    #[serde(skip)]
    pub(super) output: String,
    #[serde(skip)]
    pub(super) history: VecDeque<HistoryEntry>,
    #[serde(skip)]
    pub(super) analysis_promise: Option<Promise<AnalysisOutcome>>,
    #[serde(skip)]
    pub(super) warning: Option<AppError>,
    #[serde(skip)]
    pub(super) status_note: Option<&'static str>,
}

impl Default for ChartBotApp {
    fn default() -> Self {
        Self {
            last_directory: None,
            show_history: true,
            analyzer: ChartAnalyzer::default(),
            preview: PreviewState::default(),
            image_path: None,
            output: String::new(),
            history: VecDeque::with_capacity(APP.history_capacity),
            analysis_promise: None,
            warning: None,
            status_note: None,
        }
    }
}

impl ChartBotApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        analyzer: ChartAnalyzer,
        initial_image: Option<PathBuf>,
    ) -> Self {
        let mut app: ChartBotApp = match cc.storage.and_then(|s| eframe::get_value(s, eframe::APP_KEY)) {
            Some(value) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                value
            }
            None => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted ChartBot state. Creating anew.");
                }
                ChartBotApp::default()
            }
        };

        app.analyzer = analyzer;
        if let Some(path) = initial_image {
            app.open_image(&path);
        }
        app
    }

    pub(super) fn is_analyzing(&self) -> bool {
        self.analysis_promise.is_some()
    }

    /// Analyze stays disabled until a chart decoded and while a run is in flight.
    pub(super) fn can_analyze(&self) -> bool {
        self.image_path.is_some() && !self.is_analyzing()
    }

    pub(super) fn engine_status(&self) -> String {
        crate::analysis::report::engine_status(
            self.analyzer
                .engine()
                .map(|e| e.executable().to_path_buf())
                .as_ref(),
        )
    }

    /// Native file picker, remembering the last directory between sessions.
    pub(super) fn pick_image(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title(UI_TEXT.file_dialog_title)
            .add_filter(UI_TEXT.file_filter_name, APP.image_extensions);
        if let Some(dir) = self.last_directory.as_ref().filter(|d| d.is_dir()) {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            self.open_image(&path);
        }
    }

    pub(super) fn open_image(&mut self, path: &Path) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Opening chart image {:?}", path);
        }

        self.last_directory = path.parent().map(Path::to_path_buf);
        self.status_note = None;

        match ChartImage::load(path) {
            Ok(chart) => {
                self.output = format!("{}{}", UI_TEXT.loaded_prefix, chart.file_name());
                self.image_path = Some(chart.path().to_path_buf());
                self.preview = PreviewState::Loaded {
                    chart,
                    texture: None,
                };
            }
            Err(e) => {
                log::warn!("⚠️  {}", e);
                self.output = format!("{}{}", UI_TEXT.loaded_prefix, display_name(path));
                self.image_path = None;
                self.preview = PreviewState::Failed(AppError::ImageLoad(e.to_string()));
            }
        }
    }

    pub(super) fn record_history(&mut self, outcome: &AnalysisOutcome) {
        self.history.push_front(HistoryEntry {
            at: Local::now(),
            image_path: outcome.image_path.clone(),
            report: Arc::clone(&outcome.report),
            elapsed: outcome.elapsed,
        });
        self.history.truncate(APP.history_capacity);
    }

    pub(super) fn show_history_entry(&mut self, index: usize) {
        if let Some(entry) = self.history.get(index) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Showing history entry {} ({})", index, entry.report.file_name);
            }
            self.output = entry.report.render();
        }
    }

    fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        let (open, analyze) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::O),
                i.modifiers.command && i.key_pressed(egui::Key::Enter),
            )
        });

        if open && !self.is_analyzing() {
            self.pick_image();
        }
        if analyze && !self.is_analyzing() {
            self.start_analysis();
        }
    }
}

impl eframe::App for ChartBotApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight analysis so its thread result is discarded
        self.analysis_promise = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_analysis(ctx);
        self.handle_global_shortcuts(ctx);

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        if self.show_history {
            self.render_side_panel(ctx);
        }
        self.render_central_panel(ctx);
        self.render_warning_window(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_app_cannot_analyze() {
        let app = ChartBotApp::default();
        assert!(!app.can_analyze());
        assert!(matches!(app.preview, PreviewState::Empty));
        assert_eq!(app.engine_status(), "not found");
    }

    #[test]
    fn test_failed_load_keeps_analyze_disabled() {
        let path = std::env::temp_dir().join(format!("chartbot_app_{}_bad.png", std::process::id()));
        fs::write(&path, b"not an image").unwrap();

        let mut app = ChartBotApp::default();
        app.open_image(&path);
        fs::remove_file(&path).ok();

        assert!(!app.can_analyze());
        assert!(matches!(app.preview, PreviewState::Failed(AppError::ImageLoad(_))));
        assert!(app.output.starts_with(UI_TEXT.loaded_prefix));
        assert_eq!(app.last_directory, Some(std::env::temp_dir()));
    }

    #[test]
    fn test_successful_load_enables_analyze() {
        let path = std::env::temp_dir().join(format!("chartbot_app_{}_ok.png", std::process::id()));
        image::RgbaImage::new(3, 3).save(&path).unwrap();

        let mut app = ChartBotApp::default();
        app.open_image(&path);
        fs::remove_file(&path).ok();

        assert!(app.can_analyze());
        assert_eq!(app.image_path.as_deref(), Some(path.as_path()));
        assert_eq!(app.output, format!("{}{}", UI_TEXT.loaded_prefix, display_name(&path)));
    }

    #[test]
    fn test_analyze_without_image_warns_and_stays_idle() {
        let mut app = ChartBotApp::default();
        app.start_analysis();

        assert!(matches!(app.warning, Some(AppError::NoImageSelected)));
        assert!(app.analysis_promise.is_none());
        assert!(app.output.is_empty());
    }

    #[test]
    fn test_failed_load_after_success_clears_stale_path() {
        let good = std::env::temp_dir().join(format!("chartbot_app_{}_first.png", std::process::id()));
        let bad = std::env::temp_dir().join(format!("chartbot_app_{}_second.png", std::process::id()));
        image::RgbaImage::new(2, 2).save(&good).unwrap();
        fs::write(&bad, b"truncated").unwrap();

        let mut app = ChartBotApp::default();
        app.open_image(&good);
        assert!(app.can_analyze());

        app.open_image(&bad);
        fs::remove_file(&good).ok();
        fs::remove_file(&bad).ok();

        assert_eq!(app.image_path, None);
        assert!(!app.can_analyze());
        assert!(matches!(app.preview, PreviewState::Failed(_)));

        app.start_analysis();
        assert!(matches!(app.warning, Some(AppError::NoImageSelected)));
        assert!(app.analysis_promise.is_none());
    }

    #[test]
    fn test_history_keeps_full_image_path() {
        let mut app = ChartBotApp::default();
        let path = PathBuf::from("charts").join("btc_4h.png");
        let outcome = ChartAnalyzer::default().analyze(&path);

        app.record_history(&outcome);

        assert_eq!(app.history[0].image_path, path);
        assert_eq!(app.history[0].report.file_name, "btc_4h.png");
    }

    #[test]
    fn test_history_is_capped_and_newest_first() {
        let mut app = ChartBotApp::default();
        let analyzer = ChartAnalyzer::default();

        for i in 0..APP.history_capacity + 5 {
            let outcome = analyzer.analyze(Path::new(&format!("chart_{i}.png")));
            app.record_history(&outcome);
        }

        assert_eq!(app.history.len(), APP.history_capacity);
        let newest = format!("chart_{}.png", APP.history_capacity + 4);
        assert_eq!(app.history[0].report.file_name, newest);
        assert_eq!(app.history[0].image_path, PathBuf::from(&newest));

        app.show_history_entry(0);
        assert!(app.output.starts_with(&format!("File: {}", newest)));
    }

    #[test]
    fn test_state_roundtrip_keeps_only_preferences() {
        let mut app = ChartBotApp::default();
        app.last_directory = Some(PathBuf::from("/charts"));
        app.show_history = false;
        app.output = "transient".to_string();

        let json = serde_json::to_string(&app).unwrap();
        let restored: ChartBotApp = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.last_directory, Some(PathBuf::from("/charts")));
        assert!(!restored.show_history);
        assert!(restored.output.is_empty());
    }

    #[test]
    fn test_no_image_error_text() {
        let err = AppError::NoImageSelected;
        assert_eq!(err.title(), "No image");
        assert_eq!(err.to_string(), "Please open a chart image first.");
    }
}
