use eframe::egui::{RichText, Ui};

use crate::analysis::Bias;
use crate::ui::config::UI_CONFIG;

/// Semantic label helpers on `egui::Ui`, so panels share one palette.
pub trait UiStyleExt {
    /// Small gray text for timestamps and hints.
    fn label_subdued(&mut self, text: impl Into<String>);

    fn label_bias(&mut self, bias: Bias);

    /// "Long: 3" style tally, the count in the bias color.
    fn label_bias_count(&mut self, bias: Bias, count: usize);

    /// Status-bar text, switched to the warning color when something is missing.
    fn label_status(&mut self, text: impl Into<String>, healthy: bool);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn label_bias(&mut self, bias: Bias) {
        self.label(
            RichText::new(bias.label())
                .strong()
                .color(UI_CONFIG.colors.for_bias(bias)),
        );
    }

    fn label_bias_count(&mut self, bias: Bias, count: usize) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.label_subdued(format!("{}:", bias.name()));
            ui.label(
                RichText::new(count.to_string())
                    .small()
                    .color(UI_CONFIG.colors.for_bias(bias)),
            );
        });
    }

    fn label_status(&mut self, text: impl Into<String>, healthy: bool) {
        if healthy {
            self.label_subdued(text);
        } else {
            self.label(RichText::new(text).small().color(UI_CONFIG.colors.warning));
        }
    }
}
