//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every use site is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit each tesseract candidate path as it is checked.
    pub print_ocr_discovery: bool,
    /// Emit the full tesseract command line and output size.
    pub print_ocr_invocation: bool,
    /// Emit a line when a chart is downscaled for its preview texture.
    pub print_image_loading: bool,
    /// Emit UI interaction logs (open, analyze, history clicks).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ocr_discovery: false,
    print_ocr_invocation: false,
    print_image_loading: false,
    print_ui_interactions: true,
    print_state_serde: false,
    print_shutdown: false,
};
