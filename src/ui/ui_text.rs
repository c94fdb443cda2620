/// All user-facing strings in one place.
pub struct UiText {
    pub open_button: &'static str,
    pub analyze_button: &'static str,
    pub analyzing_button: &'static str,
    pub copy_button: &'static str,
    pub history_toggle: &'static str,
    pub file_dialog_title: &'static str,
    pub file_filter_name: &'static str,
    pub no_image: &'static str,
    pub image_load_failed: &'static str,
    pub loaded_prefix: &'static str,
    pub analyzing: &'static str,
    pub no_image_title: &'static str,
    pub no_image_body: &'static str,
    pub ok_button: &'static str,
    pub history_heading: &'static str,
    pub history_empty: &'static str,
    pub history_clear: &'static str,
    pub no_levels_short: &'static str,
    pub disclaimer: &'static str,
    pub copied: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    open_button: "Open Chart Image",
    analyze_button: "Analyze",
    analyzing_button: "Analyzing…",
    copy_button: "Copy report",
    history_toggle: "History",
    file_dialog_title: "Open Chart",
    file_filter_name: "Images",
    no_image: "No image loaded",
    image_load_failed: "Failed to load image.",
    loaded_prefix: "Loaded: ",
    analyzing: "Running OCR…",
    no_image_title: "No image",
    no_image_body: "Please open a chart image first.",
    ok_button: "OK",
    history_heading: "Session history",
    history_empty: "No analyses yet",
    history_clear: "Clear",
    no_levels_short: "no levels",
    disclaimer: "Educational tool only. Not financial advice.",
    copied: "Report copied to clipboard",
};
