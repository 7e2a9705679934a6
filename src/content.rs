//! The content source: enumerates readable files under the configured roots
//! and loads their normalized text.

use crate::error::{Result, SitegrepError};
use crate::normalize::normalize;
use crate::walker::walk_dir;
use std::fs;
use std::path::{Path, PathBuf};

/// One discovered content file, tied to the root it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    root: PathBuf,
    path: PathBuf,
}

impl FileRef {
    pub fn new(root: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
        }
    }

    /// The root directory this file was enumerated under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path to the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including the extension.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Extension without the leading dot; empty when the file has none.
    pub fn extension(&self) -> &str {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
    }

    /// Reads the file and returns its normalized text.
    ///
    /// Markup is stripped except line breaks, code and paragraph tags, so
    /// matches land on visible text rather than tag soup. Files that cannot
    /// be read (or are not valid UTF-8) fail here and are skipped by the
    /// engine.
    pub fn read_text(&self) -> Result<String> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SitegrepError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        Ok(normalize(&raw))
    }
}

/// Yields the files a search should consider.
///
/// Implementations must skip directory pseudo-entries and silently omit
/// entries they cannot stat; exclusion filtering by file name is the
/// engine's job.
pub trait ContentSource: Send + Sync {
    fn enumerate<'a>(&'a self, roots: &'a [PathBuf]) -> Box<dyn Iterator<Item = FileRef> + 'a>;
}

/// Filesystem-backed content source walking each root recursively.
#[derive(Debug, Default)]
pub struct FsContentSource;

impl ContentSource for FsContentSource {
    fn enumerate<'a>(&'a self, roots: &'a [PathBuf]) -> Box<dyn Iterator<Item = FileRef> + 'a> {
        Box::new(roots.iter().flat_map(|root| {
            walk_dir(root)
                .filter(|entry| entry.path().is_file())
                .map(move |entry| FileRef::new(root.clone(), entry.path()))
        }))
    }
}
