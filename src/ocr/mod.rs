//! Thin wrapper over an external tesseract binary.

pub mod locate;
pub mod tesseract;

pub use locate::{TesseractCandidate, default_candidates, locate_in, locate_tesseract};
pub use tesseract::{OcrEngine, OcrError};
