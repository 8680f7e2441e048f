//! Source formats and per-format text extraction.

use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;

use crate::loader::docx;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("DOCX has no word/document.xml part")]
    MissingDocumentPart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Detects the format from the file extension, case-insensitively.
    /// `None` means the file is not something the screener reads.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" | "md" => Some(DocumentFormat::PlainText),
            _ => None,
        }
    }

    pub fn extract(self, path: &Path) -> Result<String, ExtractError> {
        match self {
            DocumentFormat::Pdf => extract_pdf(path),
            DocumentFormat::Docx => docx::extract_docx(path),
            DocumentFormat::PlainText => extract_plain_text(path),
        }
    }
}

/// pdf-extract panics on some malformed files; the panic is contained here.
/// The default hook still prints the panic to stderr, so the skip reason
/// carries the same message to tie it to the file.
fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(path))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(payload) => Err(ExtractError::Pdf(format!(
            "parser panicked: {}",
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

fn extract_plain_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
