use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A Go package import path, e.g. `github.com/nu7hatch/gotrail`.
///
/// Import paths follow the host/owner/repo convention for their first three
/// segments; anything deeper addresses a package inside the repository. A
/// trailing `/...` wildcard addresses every package under a prefix and is
/// ignored for working-copy location purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportPath(String);

impl ImportPath {
    pub fn new(path: impl Into<String>) -> Result<Self, ImportPathError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(ImportPathError::Empty);
        }
        if path.contains(char::is_whitespace) {
            return Err(ImportPathError::ContainsWhitespace(path));
        }
        Ok(Self(path))
    }

    /// The full import path as written in the manifest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The repository-root portion of the path: the trailing `/...` wildcard
    /// stripped, then at most the first three slash-separated segments.
    pub fn repo_root(&self) -> String {
        let trimmed = self.0.strip_suffix("/...").unwrap_or(&self.0);
        trimmed
            .split('/')
            .take(3)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ImportPath {
    type Err = ImportPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Errors that can occur when constructing an import path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportPathError {
    #[error("Import path is empty")]
    Empty,

    #[error("Import path contains whitespace: '{0}'")]
    ContainsWhitespace(String),
}
