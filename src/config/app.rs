//! Application identity and window settings

pub struct AppConfig {
    pub title: &'static str,
    pub version: &'static str,
    pub min_window_size: [f32; 2],
    pub initial_window_size: [f32; 2],
    // Preview is scaled down (never up) to this width
    pub preview_max_width: f32,
    // Decoded charts are downscaled so neither side exceeds this; GPUs reject larger textures
    pub preview_max_texture_side: u32,
    // Extensions accepted by the file picker and the chart loader
    pub image_extensions: &'static [&'static str],
    // How many analyses the session history keeps
    pub history_capacity: usize,
}

pub const APP: AppConfig = AppConfig {
    title: "ChartBot Pro",
    version: env!("CARGO_PKG_VERSION"),
    min_window_size: [980.0, 640.0],
    initial_window_size: [1180.0, 760.0],
    preview_max_width: 900.0,
    preview_max_texture_side: 4096,
    image_extensions: &["png", "jpg", "jpeg", "bmp"],
    history_capacity: 20,
};
