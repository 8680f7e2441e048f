//! Document Loader — walks the input folders and extracts raw text.
//!
//! Contract with the engine: a file that cannot be read never becomes an
//! error. It is left out of the returned documents and listed in `skipped`
//! so the caller can count and report it.

pub mod docx;
pub mod formats;

use std::fs;
use std::path::{Component, Path};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::errors::ScreenerError;
use crate::models::{RawDocument, SkippedDocument};

use formats::DocumentFormat;

const NOT_A_FILE: &str = "not a regular file";

/// Documents read from one folder, plus the files that could not be read.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub documents: Vec<RawDocument>,
    pub skipped: Vec<SkippedDocument>,
}

/// How a document id is derived from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdStyle {
    FileName,
    RelativePath,
}

/// Job descriptions: top level of `dir` only, ids are file names.
pub fn load_jobs(dir: &Path) -> Result<LoadOutcome, ScreenerError> {
    load_folder(dir, Some(1), IdStyle::FileName)
}

/// Resumes: `dir` and all subfolders, ids are `/`-separated paths relative to `dir`.
pub fn load_resumes(dir: &Path) -> Result<LoadOutcome, ScreenerError> {
    load_folder(dir, None, IdStyle::RelativePath)
}

fn load_folder(
    dir: &Path,
    max_depth: Option<usize>,
    id_style: IdStyle,
) -> Result<LoadOutcome, ScreenerError> {
    let metadata = fs::metadata(dir).map_err(|source| ScreenerError::InputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ScreenerError::InputDir {
            path: dir.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        });
    }

    let mut walker = WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut outcome = LoadOutcome::default();

    for entry in walker.into_iter().filter_entry(|e| !is_ignored(e)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let id = e
                    .path()
                    .map(|p| document_id(dir, p, id_style))
                    .unwrap_or_else(|| dir.display().to_string());
                warn!("Skipping '{id}': {e}");
                outcome.skipped.push(SkippedDocument {
                    id,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let Some(format) = DocumentFormat::from_path(path) else {
            debug!("Ignoring unsupported file {}", path.display());
            continue;
        };

        let id = document_id(dir, path, id_style);
        if !entry.file_type().is_file() {
            warn!("Skipping '{id}': {NOT_A_FILE}");
            outcome.skipped.push(SkippedDocument {
                id,
                reason: NOT_A_FILE.to_string(),
            });
            continue;
        }

        match format.extract(path) {
            Ok(text) => {
                debug!("Loaded '{id}' ({} chars)", text.len());
                outcome.documents.push(RawDocument::new(id, text));
            }
            Err(e) => {
                warn!("Skipping '{id}': {e}");
                outcome.skipped.push(SkippedDocument {
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Loaded {} documents from {} ({} skipped)",
        outcome.documents.len(),
        dir.display(),
        outcome.skipped.len()
    );

    Ok(outcome)
}

/// Hidden files and folders, and Office lock files (`~$cv.docx`).
fn is_ignored(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.') || name.starts_with("~$"))
            .unwrap_or(false)
}

fn document_id(root: &Path, path: &Path, id_style: IdStyle) -> String {
    match id_style {
        IdStyle::FileName => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        IdStyle::RelativePath => {
            let relative = path.strip_prefix(root).unwrap_or(path);
            relative
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("/")
        }
    }
}
