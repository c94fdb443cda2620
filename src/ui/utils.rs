use eframe::egui::{Context, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);
}

/// Formats a level with "Trader Precision".
/// - Large (>1000): 2 decimals
/// - Medium (1-1000): 4 decimals
/// - Small (<1): 6 decimals
pub fn format_level(level: f64) -> String {
    let abs_level = level.abs();

    if abs_level >= 1000.0 {
        format!("{:.2}", level)
    } else if abs_level >= 1.0 {
        format!("{:.4}", level)
    } else {
        format!("{:.6}", level)
    }
}
