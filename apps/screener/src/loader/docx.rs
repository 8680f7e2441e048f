//! DOCX text: the `word/document.xml` part, one line per paragraph.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::loader::formats::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

// `<w:p>` or `<w:p attr…>`, but not `<w:pPr>`.
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<w:p[ >].*?</w:p>").expect("valid paragraph pattern"));
// Text runs, plus tabs and line breaks which become spaces.
static RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab/>|<w:br/>").expect("valid run pattern")
});

pub fn extract_docx(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(ZipError::FileNotFound) => return Err(ExtractError::MissingDocumentPart),
        Err(e) => return Err(e.into()),
    }
    Ok(document_xml_to_text(&xml))
}

/// Joins each paragraph's runs and puts paragraphs on separate lines.
pub fn document_xml_to_text(xml: &str) -> String {
    PARAGRAPH
        .find_iter(xml)
        .map(|paragraph| {
            RUN.captures_iter(paragraph.as_str())
                .map(|run| match run.get(1) {
                    Some(text) => unescape_xml(text.as_str()),
                    None => " ".to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
