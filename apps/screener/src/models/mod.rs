pub mod document;
pub mod result;

pub use document::{Document, RawDocument, SkippedDocument};
pub use result::{Band, RankedResult, ResultRow, SkippedJob};
