//! Tesseract OCR backend implementation.
//!
//! Uses the Tesseract binary via command-line for text extraction. This is the
//! traditional, widely-available OCR option.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;
use tracing::debug;

use super::backend::{OcrBackend, OcrError};

/// Tesseract OCR backend.
pub struct TesseractBackend {
    /// Binary name or path.
    command: String,
    /// Language passed via `-l`.
    language: String,
}

impl TesseractBackend {
    /// Create a backend invoking `command` with the given language.
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }

    /// Decode uploaded bytes and write them as a PNG tesseract can read.
    fn write_decoded_image(&self, image_bytes: &[u8], dir: &Path) -> Result<std::path::PathBuf, OcrError> {
        let decoded =
            image::load_from_memory(image_bytes).map_err(|e| OcrError::Decode(e.to_string()))?;

        let image_path = dir.join("upload.png");
        decoded
            .save(&image_path)
            .map_err(|e| OcrError::OcrFailed(format!("failed to write image: {}", e)))?;
        Ok(image_path)
    }

    /// Run Tesseract on an image file.
    fn run_tesseract(&self, image_path: &Path) -> Result<String, OcrError> {
        let output = Command::new(&self.command)
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        match output {
            Ok(output) => {
                if output.status.success() {
                    Ok(String::from_utf8_lossy(&output.stdout).to_string())
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    Err(OcrError::OcrFailed(format!("tesseract failed: {}", stderr)))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(OcrError::BackendNotAvailable(
                    "tesseract not found (install tesseract-ocr)".to_string(),
                ))
            }
            Err(e) => Err(OcrError::Io(e)),
        }
    }
}

impl Default for TesseractBackend {
    fn default() -> Self {
        Self::new("tesseract", "eng")
    }
}

impl OcrBackend for TesseractBackend {
    fn extract_text(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        let temp_dir = TempDir::new()?;
        let image_path = self.write_decoded_image(image_bytes, temp_dir.path())?;

        debug!(bytes = image_bytes.len(), "running tesseract on upload");
        self.run_tesseract(&image_path)
    }

    fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }

    fn availability_hint(&self) -> String {
        if self.is_available() {
            "Tesseract is available".to_string()
        } else {
            "Tesseract not installed. Install with: apt install tesseract-ocr".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_decode() {
        let backend = TesseractBackend::default();
        let result = backend.extract_text(b"definitely not an image");
        assert!(matches!(result, Err(OcrError::Decode(_))));
    }

    #[test]
    fn test_empty_bytes_fail_decode() {
        let backend = TesseractBackend::default();
        let result = backend.extract_text(&[]);
        assert!(matches!(result, Err(OcrError::Decode(_))));
    }
}
