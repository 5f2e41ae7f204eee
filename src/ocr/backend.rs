//! OCR backend abstraction.

use thiserror::Error;

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum OcrError {
    /// The uploaded bytes are not a supported image format.
    #[error("Unsupported or corrupt image: {0}")]
    Decode(String),

    /// The OCR tool is not installed.
    #[error("OCR backend not available: {0}")]
    BackendNotAvailable(String),

    /// The OCR tool ran but failed.
    #[error("OCR failed: {0}")]
    OcrFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A text extractor over raw image bytes.
///
/// Implementations are synchronous and blocking; async callers should wrap
/// calls in `spawn_blocking`.
pub trait OcrBackend: Send + Sync {
    /// Extract text from the image. The returned string is the engine's raw
    /// output, whitespace and newlines included.
    fn extract_text(&self, image_bytes: &[u8]) -> Result<String, OcrError>;

    /// Check whether the backend can run on this host.
    fn is_available(&self) -> bool;

    /// Human-readable installation hint when unavailable.
    fn availability_hint(&self) -> String;
}
