use eframe::egui::Color32;

use crate::analysis::Bias;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub preview_background: Color32,
    pub preview_text: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub bias_long: Color32,
    pub bias_short: Color32,
    pub bias_neutral: Color32,
}

impl UiColors {
    pub fn for_bias(&self, bias: Bias) -> Color32 {
        match bias {
            Bias::Long => self.bias_long,
            Bias::Short => self.bias_short,
            Bias::Neutral => self.bias_neutral,
        }
    }
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    pub output_min_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 30, 34),
        side_panel: Color32::from_rgb(25, 25, 25),
        preview_background: Color32::from_rgb(17, 17, 17),
        preview_text: Color32::from_rgb(187, 187, 187),
        error: Color32::from_rgb(255, 100, 100),
        warning: Color32::from_rgb(255, 215, 0),
        bias_long: Color32::from_rgb(130, 200, 140),
        bias_short: Color32::from_rgb(230, 120, 120),
        bias_neutral: Color32::from_rgb(200, 200, 160),
    },
    side_panel_min_width: 200.0,
    output_min_height: 220.0,
};
