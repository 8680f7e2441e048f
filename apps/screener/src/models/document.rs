use serde::{Deserialize, Serialize};

use crate::engine::normalizer::{normalize, tokens};

/// Text as handed over by the loader, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub id: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A normalized document. Immutable once built.
///
/// `id` is the job file name or the resume path relative to its folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: String,
    text: String,
    tokens: Vec<String>,
}

impl Document {
    /// Normalizes `raw_text` and splits it into tokens.
    pub fn new(id: impl Into<String>, raw_text: &str) -> Self {
        let text = normalize(raw_text);
        let tokens = tokens(&text);
        Self {
            id: id.into(),
            text,
            tokens,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whitespace-delimited tokens in document order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// No token survived normalization.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&RawDocument> for Document {
    fn from(raw: &RawDocument) -> Self {
        Document::new(raw.id.clone(), &raw.text)
    }
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Document::new(raw.id, &raw.text)
    }
}

/// A document that could not take part in screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub id: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_normalizes_on_construction() {
        let doc = Document::new("cv.pdf", "Senior  RUST\nEngineer!");
        assert_eq!(doc.id(), "cv.pdf");
        assert_eq!(doc.text(), "senior rust engineer");
        assert_eq!(doc.tokens(), &["senior", "rust", "engineer"]);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_punctuation_only_document_is_empty() {
        let doc = Document::new("blank.pdf", "  --- !!! \n\t ");
        assert!(doc.is_empty());
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_from_raw_document_keeps_id() {
        let raw = RawDocument::new("team/a.docx", "Python, SQL");
        let doc = Document::from(&raw);
        assert_eq!(doc.id(), "team/a.docx");
        assert_eq!(doc.tokens(), &["python", "sql"]);
    }
}
