use eframe::egui;
use poll_promise::Promise;
use std::time::Duration;

use crate::ui::app::{AppError, ChartBotApp};
use crate::ui::config::UI_TEXT;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl ChartBotApp {
    /// Kick off OCR + heuristics on a worker thread. One run at a time.
    pub(super) fn start_analysis(&mut self) {
        if self.analysis_promise.is_some() {
            return;
        }

        let Some(path) = self.image_path.clone() else {
            self.warning = Some(AppError::NoImageSelected);
            return;
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Analyze requested for {:?}", path);
        }

        let analyzer = self.analyzer.clone();
        self.output = UI_TEXT.analyzing.to_string();
        self.status_note = None;
        self.analysis_promise = Some(Promise::spawn_thread("chart_analysis", move || {
            analyzer.analyze(&path)
        }));
    }

    pub(super) fn poll_analysis(&mut self, ctx: &egui::Context) {
        let finished = self
            .analysis_promise
            .as_ref()
            .and_then(|promise| promise.ready().cloned());

        match finished {
            Some(outcome) => {
                self.analysis_promise = None;
                self.output = outcome.report.render();
                self.record_history(&outcome);
            }
            None if self.analysis_promise.is_some() => {
                // Keep waking up until the worker reports back
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            None => {}
        }
    }
}
