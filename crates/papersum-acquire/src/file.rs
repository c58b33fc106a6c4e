//! Local file reading and PDF text extraction.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use papersum_core::{AcquisitionFailure, Error, Result};

/// Read a UTF-8 text file. Invalid sequences are replaced.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a PDF file and extract its text.
pub fn read_pdf_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let text = pdf_bytes_to_text(&bytes)?;
    tracing::debug!("Extracted {} chars from {}", text.len(), path.display());
    Ok(text)
}

/// Extract the text of an in-memory PDF.
pub fn pdf_bytes_to_text(bytes: &[u8]) -> Result<String> {
    if bytes.len() < 4 || &bytes[0..4] != b"%PDF" {
        return Err(Error::acquisition(
            AcquisitionFailure::MalformedDocument,
            "not a valid PDF",
        ));
    }

    // The PDF parser panics on some malformed inputs.
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text.trim().to_string()),
        Ok(Err(e)) => Err(Error::acquisition(
            AcquisitionFailure::MalformedDocument,
            format!("Error reading PDF: {}", e),
        )),
        Err(_) => Err(Error::acquisition(
            AcquisitionFailure::MalformedDocument,
            "Error reading PDF: parser aborted",
        )),
    }
}
