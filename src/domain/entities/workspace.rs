use crate::common::error::GopinError;
use crate::common::result::GopinResult;
use crate::domain::value_objects::import_path::ImportPath;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the Go workspace root list
pub const GOPATH_VAR: &str = "GOPATH";

/// The Go workspace packages are fetched into and checked out under.
///
/// Only the first element of the GOPATH list is used; packages live under its
/// `src` subdirectory at their repository-root import path. The workspace is
/// never created or modeled beyond path arithmetic; the VCS tools own its
/// on-disk state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoWorkspace {
    root: PathBuf,
}

impl GoWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build the workspace from the GOPATH environment variable. The literal
    /// first list element is used; a list beginning with an empty element is
    /// rejected rather than skipped. Unset or empty GOPATH is a fatal
    /// precondition.
    pub fn from_env() -> GopinResult<Self> {
        let raw = env::var_os(GOPATH_VAR).ok_or_else(|| {
            GopinError::environment_misconfigured(format!("{} is not set", GOPATH_VAR))
        })?;

        Self::from_path_list(&raw)
    }

    fn from_path_list(raw: &std::ffi::OsStr) -> GopinResult<Self> {
        let first = env::split_paths(raw)
            .next()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                GopinError::environment_misconfigured(format!(
                    "first element of {} is empty",
                    GOPATH_VAR
                ))
            })?;

        Ok(Self::new(first))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `src` directory all packages live under.
    pub fn src_root(&self) -> PathBuf {
        self.root.join("src")
    }

    /// On-disk directory of the working copy backing `import_path`.
    pub fn package_dir(&self, import_path: &ImportPath) -> PathBuf {
        self.src_root().join(import_path.repo_root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_dir_joins_src_and_repo_root() {
        let workspace = GoWorkspace::new("/go");
        let path = ImportPath::new("github.com/nu7hatch/gotrail").unwrap();
        assert_eq!(
            workspace.package_dir(&path),
            PathBuf::from("/go/src/github.com/nu7hatch/gotrail")
        );
    }

    #[test]
    fn test_package_dir_strips_wildcard() {
        let workspace = GoWorkspace::new("/go");
        let path = ImportPath::new("github.com/foo/bar/...").unwrap();
        assert_eq!(
            workspace.package_dir(&path),
            PathBuf::from("/go/src/github.com/foo/bar")
        );
    }

    #[test]
    fn test_package_dir_truncates_deep_paths() {
        let workspace = GoWorkspace::new("/go");
        let path = ImportPath::new("github.com/owner/repo/cmd/tool").unwrap();
        assert_eq!(
            workspace.package_dir(&path),
            PathBuf::from("/go/src/github.com/owner/repo")
        );
    }

    #[test]
    fn test_from_path_list_takes_first_element() {
        let workspace = GoWorkspace::from_path_list("/go:/other".as_ref()).unwrap();
        assert_eq!(workspace.root(), Path::new("/go"));
    }

    #[test]
    fn test_from_path_list_rejects_empty_first_element() {
        let err = GoWorkspace::from_path_list(":/go".as_ref()).unwrap_err();
        assert!(matches!(err, GopinError::EnvironmentMisconfigured { .. }));
        assert!(err.is_precondition_failure());
    }

    #[test]
    fn test_from_path_list_rejects_empty_value() {
        assert!(GoWorkspace::from_path_list("".as_ref()).is_err());
    }

    #[test]
    fn test_src_root() {
        let workspace = GoWorkspace::new("/home/dev/go");
        assert_eq!(workspace.src_root(), PathBuf::from("/home/dev/go/src"));
    }
}
