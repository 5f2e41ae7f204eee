//! OCR text extraction from uploaded images.
//!
//! Extracts text using the Tesseract OCR binary. Uploaded bytes are decoded
//! with the `image` crate first, so unsupported or corrupt uploads fail with a
//! decode error before any external tool runs.
//!
//! The [`OcrBackend`] trait is the seam the web server depends on, so route
//! tests can substitute a stub extractor.

mod backend;
mod tesseract;

pub use backend::{OcrBackend, OcrError};
pub use tesseract::TesseractBackend;
