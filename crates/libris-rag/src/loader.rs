//! PDF text extraction.

use std::path::Path;

use libris_core::{Error, Result};

/// Extract the text content of a PDF file.
///
/// # Errors
///
/// `Error::InvalidData` when the file cannot be parsed as a PDF (missing
/// file, wrong format, encrypted content).
pub fn load_pdf(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    pdf_extract::extract_text(path).map_err(|e| {
        Error::invalid_data(format!(
            "Unable to extract text from {}: {e}",
            path.display()
        ))
    })
}
