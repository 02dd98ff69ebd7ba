use crate::common::error::GopinError;
use crate::common::result::GopinResult;
use crate::domain::value_objects::import_path::ImportPath;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default manifest file name, looked up in the current directory when no
/// path is given on the command line.
pub const DEFAULT_MANIFEST_NAME: &str = "Godeps";

/// One dependency declaration parsed from the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    /// Go import path of the package
    pub import_path: ImportPath,

    /// Revision to pin the working copy to: a tag, branch, or commit hash.
    /// Empty when the manifest line carried no second token; it is passed
    /// through to the VCS command literally.
    pub revision: String,
}

impl DependencyEntry {
    pub fn new(import_path: ImportPath, revision: impl Into<String>) -> Self {
        Self {
            import_path,
            revision: revision.into(),
        }
    }
}

/// The parsed manifest: an ordered sequence of dependency entries.
///
/// Duplicate import paths are legal and kept; each entry is processed
/// independently, so later duplicates win on the same on-disk path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub entries: Vec<DependencyEntry>,
}

impl Manifest {
    /// Parse manifest text.
    ///
    /// Per line: everything from the first `#` onward is a comment and
    /// stripped; lines that are then empty or whitespace-only are skipped;
    /// the rest split on whitespace into import path (first token) and
    /// revision (second token, empty if absent). Further tokens are ignored.
    pub fn parse(contents: &str) -> Self {
        let mut entries = Vec::new();

        for raw_line in contents.lines() {
            let line = match raw_line.find('#') {
                Some(pos) => &raw_line[..pos],
                None => raw_line,
            };

            let mut tokens = line.split_whitespace();
            let import_path = match tokens.next() {
                Some(token) => token,
                None => continue,
            };
            let revision = tokens.next().unwrap_or("");

            // A token from a whitespace split is non-empty and contains no
            // whitespace, so this cannot fail.
            if let Ok(import_path) = ImportPath::new(import_path) {
                entries.push(DependencyEntry::new(import_path, revision));
            }
        }

        Self { entries }
    }

    /// Load and parse the manifest file at `path`.
    ///
    /// A missing or unreadable file is fatal and reported before any package
    /// work starts.
    pub fn load(path: &Path) -> GopinResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GopinError::manifest_unreadable_with_source(path, e.to_string(), e)
        })?;
        Ok(Self::parse(&contents))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
