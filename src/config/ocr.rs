//! Tesseract discovery and invocation settings

pub struct OcrConfig {
    /// Language passed to tesseract via `-l`
    pub default_language: &'static str,
    /// Folder (next to the executable or the sources) holding a bundled tesseract
    pub bundle_dir: &'static str,
    /// Subfolder of `bundle_dir` that must exist for a bundle to count
    pub tessdata_dir: &'static str,
    pub executable_name: &'static str,
    /// Fixed system install locations, checked in order
    pub system_paths: &'static [&'static str],
    /// Whether a system install's parent dir is exported as TESSDATA_PREFIX
    pub system_prefix_from_parent: bool,
    /// Characters of raw OCR text shown in the report
    pub preview_chars: usize,
}

#[cfg(windows)]
pub const OCR: OcrConfig = OcrConfig {
    default_language: "eng",
    bundle_dir: "tess",
    tessdata_dir: "tessdata",
    executable_name: "tesseract.exe",
    system_paths: &[
        r"C:\Program Files\Tesseract-OCR\tesseract.exe",
        r"C:\Program Files (x86)\Tesseract-OCR\tesseract.exe",
    ],
    system_prefix_from_parent: true,
    preview_chars: 1200,
};

#[cfg(not(windows))]
pub const OCR: OcrConfig = OcrConfig {
    default_language: "eng",
    bundle_dir: "tess",
    tessdata_dir: "tessdata",
    executable_name: "tesseract",
    system_paths: &["/usr/bin/tesseract", "/usr/local/bin/tesseract"],
    // Distro packages know where their own tessdata lives
    system_prefix_from_parent: false,
    preview_chars: 1200,
};
