use image::DynamicImage;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::APP;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Error)]
pub enum ChartLoadError {
    #[error("unsupported image type: {0:?} (expected png, jpg, jpeg or bmp)")]
    UnsupportedExtension(PathBuf),
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded chart, kept as RGBA8 for the preview texture.
/// The pixels are a downscaled copy when the source is larger than a texture may be.
#[derive(Clone)]
pub struct ChartImage {
    path: PathBuf,
    file_name: String,
    source_size: [u32; 2],
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl std::fmt::Debug for ChartImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartImage")
            .field("path", &self.path)
            .field("source_size", &self.source_size)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ChartImage {
    pub fn load(path: &Path) -> Result<Self, ChartLoadError> {
        if !has_supported_extension(path) {
            return Err(ChartLoadError::UnsupportedExtension(path.to_path_buf()));
        }

        let decoded = image::open(path).map_err(|source| ChartLoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let source_size = [decoded.width(), decoded.height()];
        let rgba = fit_within(decoded, APP.preview_max_texture_side).to_rgba8();

        Ok(Self {
            path: path.to_path_buf(),
            file_name: display_name(path),
            source_size,
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Dimensions of the file on disk, before any downscaling.
    pub fn source_size(&self) -> [u32; 2] {
        self.source_size
    }

    /// Display size scaled down to at most `max_width` and `available_width`,
    /// keeping aspect ratio. Never scales up.
    pub fn preview_size(&self, max_width: f32, available_width: f32) -> [f32; 2] {
        let (w, h) = (self.width as f32, self.height as f32);
        if w <= 0.0 || h <= 0.0 {
            return [0.0, 0.0];
        }
        let target = w.min(max_width).min(available_width.max(1.0));
        let scale = target / w;
        [w * scale, h * scale]
    }
}

/// Shrinks `image` to fit a `max_side` square, keeping aspect ratio.
fn fit_within(image: DynamicImage, max_side: u32) -> DynamicImage {
    if image.width() <= max_side && image.height() <= max_side {
        return image;
    }

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_image_loading {
        log::info!(
            "Downscaling {}x{} chart to fit {}px",
            image.width(),
            image.height(),
            max_side
        );
    }

    image.resize(max_side, max_side, FilterType::Triangle)
}

/// File name only, falling back to the full path for odd inputs like "..".
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Case-insensitive check against `APP.image_extensions`.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            APP.image_extensions
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chartbot_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_extension_filter() {
        assert!(has_supported_extension(Path::new("a/chart.png")));
        assert!(has_supported_extension(Path::new("chart.JPG")));
        assert!(has_supported_extension(Path::new("chart.jpeg")));
        assert!(has_supported_extension(Path::new("chart.bmp")));
        assert!(!has_supported_extension(Path::new("chart.gif")));
        assert!(!has_supported_extension(Path::new("chart")));
    }

    #[test]
    fn test_unsupported_extension_is_rejected_before_reading() {
        let err = ChartImage::load(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, ChartLoadError::UnsupportedExtension(_)));
    }

    #[test]
    fn test_corrupt_file_reports_decode_error() {
        let path = temp_path("corrupt.png");
        fs::write(&path, b"definitely not a png").unwrap();
        let err = ChartImage::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ChartLoadError::Decode { .. }));
    }

    #[test]
    fn test_load_png() {
        let path = temp_path("tiny.png");
        image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let chart = ChartImage::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(chart.size(), [4, 2]);
        assert_eq!(chart.rgba().len(), 4 * 2 * 4);
        assert_eq!(&chart.rgba()[..4], &[10, 20, 30, 255]);
        assert_eq!(chart.source_size(), [4, 2]);
        assert!(chart.file_name().ends_with("tiny.png"));
    }

    #[test]
    fn test_preview_never_upscales() {
        let chart = ChartImage {
            path: PathBuf::from("x.png"),
            file_name: "x.png".to_string(),
            source_size: [1800, 600],
            width: 1800,
            height: 600,
            rgba: Vec::new(),
        };
        assert_eq!(chart.preview_size(900.0, 2000.0), [900.0, 300.0]);
        assert_eq!(chart.preview_size(900.0, 450.0), [450.0, 150.0]);

        let small = ChartImage {
            width: 200,
            height: 100,
            ..chart
        };
        assert_eq!(small.preview_size(900.0, 2000.0), [200.0, 100.0]);
    }

    #[test]
    fn test_tall_chart_is_downscaled_to_texture_limit() {
        let path = temp_path("tall.png");
        image::RgbaImage::from_pixel(1, 20_000, image::Rgba([0, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let chart = ChartImage::load(&path).unwrap();
        fs::remove_file(&path).ok();

        let [w, h] = chart.size();
        let max_side = APP.preview_max_texture_side as usize;
        assert!(w >= 1 && w <= max_side);
        assert!(h <= max_side && h > max_side / 2);
        assert_eq!(chart.rgba().len(), w * h * 4);
        assert_eq!(chart.source_size(), [1, 20_000]);
    }

    #[test]
    fn test_wide_chart_keeps_aspect_ratio_when_downscaled() {
        let path = temp_path("wide.png");
        image::RgbaImage::from_pixel(8192, 512, image::Rgba([255, 255, 255, 255]))
            .save(&path)
            .unwrap();

        let chart = ChartImage::load(&path).unwrap();
        fs::remove_file(&path).ok();

        let max_side = APP.preview_max_texture_side as usize;
        assert_eq!(chart.size(), [max_side, max_side / 16]);
        assert_eq!(chart.rgba().len(), max_side * (max_side / 16) * 4);
        assert_eq!(chart.source_size(), [8192, 512]);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/tmp/charts/eth.png")), "eth.png");
    }
}
