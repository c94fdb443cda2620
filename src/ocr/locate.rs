use std::path::{Path, PathBuf};

use crate::config::OCR;
use crate::ocr::tesseract::OcrEngine;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// One place tesseract might live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesseractCandidate {
    pub executable: PathBuf,
    /// Must also exist for the candidate to be accepted (bundles only)
    pub required_dir: Option<PathBuf>,
    pub tessdata_prefix: Option<PathBuf>,
}

impl TesseractCandidate {
    /// `<base>/tess/<exe>` plus `<base>/tess/tessdata`, with `<base>/tess` as prefix.
    pub fn bundled(base: &Path) -> Self {
        let bundle = base.join(OCR.bundle_dir);
        Self {
            executable: bundle.join(OCR.executable_name),
            required_dir: Some(bundle.join(OCR.tessdata_dir)),
            tessdata_prefix: Some(bundle),
        }
    }

    pub fn system(path: impl Into<PathBuf>) -> Self {
        let executable = path.into();
        let tessdata_prefix = if OCR.system_prefix_from_parent {
            executable.parent().map(Path::to_path_buf)
        } else {
            None
        };
        Self {
            executable,
            required_dir: None,
            tessdata_prefix,
        }
    }

    /// An explicit user-supplied path; no tessdata requirement.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            executable: path.into(),
            required_dir: None,
            tessdata_prefix: None,
        }
    }

    fn is_present(&self) -> bool {
        self.executable.is_file() && self.required_dir.as_ref().is_none_or(|dir| dir.is_dir())
    }

    fn into_engine(self) -> OcrEngine {
        OcrEngine::new(self.executable, self.tessdata_prefix)
    }
}

/// Bundled (next to the running executable), then source-relative, then system installs.
pub fn default_candidates() -> Vec<TesseractCandidate> {
    let mut candidates = Vec::new();

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(TesseractCandidate::bundled(&exe_dir));
    }

    candidates.push(TesseractCandidate::bundled(Path::new(env!(
        "CARGO_MANIFEST_DIR"
    ))));

    candidates.extend(OCR.system_paths.iter().map(TesseractCandidate::system));
    candidates
}

/// First candidate that exists on disk, in order.
pub fn locate_in(candidates: impl IntoIterator<Item = TesseractCandidate>) -> Option<OcrEngine> {
    candidates.into_iter().find_map(|candidate| {
        let present = candidate.is_present();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ocr_discovery {
            log::info!(
                "Tesseract candidate {:?}: {}",
                candidate.executable,
                if present { "found" } else { "missing" }
            );
        }

        present.then(|| candidate.into_engine())
    })
}

/// Resolve the tesseract binary, trying `override_path` first when given.
pub fn locate_tesseract(override_path: Option<&Path>) -> Option<OcrEngine> {
    let explicit = override_path.map(TesseractCandidate::explicit);
    let engine = locate_in(explicit.into_iter().chain(default_candidates()));

    match &engine {
        Some(engine) => log::info!("Tesseract: {}", engine.executable().display()),
        None => log::warn!("⚠️  Tesseract not found; OCR will be skipped"),
    }
    engine
}
