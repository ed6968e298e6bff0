//! Reads a directory of `*.txt` comment files into named documents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CorpusError;

/// One raw comment and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub name: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing left after trimming.
    Empty,
    /// Unreadable or not UTF-8.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub name: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub documents: Vec<SourceDocument>,
    pub skipped: Vec<SkippedFile>,
}

/// Load every `*.txt` file directly under `dir`, ordered by file name.
///
/// Contents are trimmed. Empty or unreadable files are skipped and listed in
/// the report rather than failing the whole load.
///
/// # Errors
///
/// - [`CorpusError::MissingDirectory`] if `dir` is not a directory.
/// - [`CorpusError::Io`] if the directory listing fails.
/// - [`CorpusError::NoData`] if no file produced a document.
pub fn load_documents(dir: &Path) -> Result<IngestReport, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let io_err = |source| CorpusError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() || !has_txt_extension(&path) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping file with non-UTF-8 name");
            continue;
        };
        files.push((name.to_string(), path));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    tracing::info!(dir = %dir.display(), files = files.len(), "reading comment files");

    let mut report = IngestReport::default();
    for (name, path) in files {
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let text = raw.trim();
                if text.is_empty() {
                    tracing::debug!(file = %name, "skipping empty file");
                    report.skipped.push(SkippedFile {
                        name,
                        reason: SkipReason::Empty,
                    });
                } else {
                    report.documents.push(SourceDocument::new(name, text));
                }
            }
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "failed to read comment file");
                report.skipped.push(SkippedFile {
                    name,
                    reason: SkipReason::Unreadable(e.to_string()),
                });
            }
        }
    }

    if report.documents.is_empty() {
        return Err(CorpusError::NoData {
            path: dir.to_path_buf(),
        });
    }

    Ok(report)
}

fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}
