use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("tesseract binary not found at {0}")]
    NotFound(PathBuf),
    #[error("failed to launch {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("tesseract exited with {}: {stderr}", exit_label(.status))]
    Failed { status: Option<i32>, stderr: String },
}

fn exit_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("code {code}"),
        None => "signal".to_string(),
    }
}

/// A tesseract installation that was found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrEngine {
    executable: PathBuf,
    tessdata_prefix: Option<PathBuf>,
}

impl OcrEngine {
    pub fn new(executable: impl Into<PathBuf>, tessdata_prefix: Option<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            tessdata_prefix,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn tessdata_prefix(&self) -> Option<&Path> {
        self.tessdata_prefix.as_deref()
    }

    /// The binary may disappear after discovery (uninstall, unplugged drive).
    pub fn is_available(&self) -> bool {
        self.executable.is_file()
    }

    /// Run `tesseract <image> stdout -l <lang>` and return what it printed.
    ///
    /// `TESSDATA_PREFIX` is set on the child only.
    pub fn recognize(&self, image: &Path, lang: &str) -> Result<String, OcrError> {
        if !self.is_available() {
            return Err(OcrError::NotFound(self.executable.clone()));
        }

        let mut cmd = Command::new(&self.executable);
        cmd.arg(image).arg("stdout").arg("-l").arg(lang);
        if let Some(prefix) = &self.tessdata_prefix {
            cmd.env("TESSDATA_PREFIX", prefix);
        }

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ocr_invocation {
            log::info!("🔎 Running {:?}", cmd);
        }

        let output = cmd.output().map_err(|source| OcrError::Spawn {
            path: self.executable.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ocr_invocation {
            log::info!("🔎 tesseract returned {} chars", text.chars().count());
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_binary_is_not_found() {
        let engine = OcrEngine::new("/definitely/not/here/tesseract", None);
        assert!(!engine.is_available());
        let err = engine
            .recognize(Path::new("chart.png"), "eng")
            .unwrap_err();
        assert!(matches!(err, OcrError::NotFound(_)));
    }

    #[test]
    fn test_failed_error_message() {
        let err = OcrError::Failed {
            status: Some(1),
            stderr: "Error opening data file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "tesseract exited with code 1: Error opening data file"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_recognize_with_stub_scripts() {
        use std::os::unix::fs::PermissionsExt;

        let dir = std::env::temp_dir().join(format!("chartbot_ocr_stub_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let ok_script = dir.join("ok.sh");
        fs::write(
            &ok_script,
            "#!/bin/sh\necho \"lang=$4 prefix=$TESSDATA_PREFIX\"\necho \"BUY 100\"\n",
        )
        .unwrap();
        let bad_script = dir.join("bad.sh");
        fs::write(&bad_script, "#!/bin/sh\necho boom >&2\nexit 3\n").unwrap();
        for script in [&ok_script, &bad_script] {
            fs::set_permissions(script, fs::Permissions::from_mode(0o755)).unwrap();
        }

        let engine = OcrEngine::new(&ok_script, Some(dir.clone()));
        let text = engine.recognize(Path::new("chart.png"), "deu").unwrap();
        assert!(text.contains("lang=deu"));
        assert!(text.contains(&format!("prefix={}", dir.display())));
        assert!(text.contains("BUY 100"));

        let err = OcrEngine::new(&bad_script, None)
            .recognize(Path::new("chart.png"), "eng")
            .unwrap_err();
        match err {
            OcrError::Failed { status, stderr } => {
                assert_eq!(status, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }

        fs::remove_dir_all(&dir).ok();
    }
}
