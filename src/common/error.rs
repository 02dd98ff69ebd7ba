use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GopinError {
    #[error("Environment misconfigured: {message}")]
    EnvironmentMisconfigured { message: String },

    #[error("Cannot read manifest {path}: {message}")]
    ManifestUnreadable {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("No supported VCS found in {path}")]
    VcsUndetected { path: PathBuf },

    #[error("Command execution failed: {command}, exit code: {exit_code}, stderr: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Pin of '{import_path}' to revision '{revision}' failed ({vcs}): {message}")]
    PinFailed {
        import_path: String,
        vcs: String,
        revision: String,
        message: String,
    },

    #[error("Fetch failed for {failed} of {total} packages")]
    FetchFailed { failed: usize, total: usize },

    #[error("Checkout failed for {failed} of {total} packages")]
    CheckoutFailed { failed: usize, total: usize },

    #[error("Install failed for package '{import_path}': {message}")]
    InstallFailed {
        import_path: String,
        message: String,
    },

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GopinError {
    pub fn environment_misconfigured(message: impl Into<String>) -> Self {
        Self::EnvironmentMisconfigured {
            message: message.into(),
        }
    }

    pub fn manifest_unreadable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ManifestUnreadable {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn manifest_unreadable_with_source(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::ManifestUnreadable {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn vcs_undetected(path: impl Into<PathBuf>) -> Self {
        Self::VcsUndetected { path: path.into() }
    }

    pub fn command_failed(
        command: impl Into<String>,
        exit_code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    pub fn pin_failed(
        import_path: impl Into<String>,
        vcs: impl Into<String>,
        revision: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::PinFailed {
            import_path: import_path.into(),
            vcs: vcs.into(),
            revision: revision.into(),
            message: message.into(),
        }
    }

    pub fn install_failed(import_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InstallFailed {
            import_path: import_path.into(),
            message: message.into(),
        }
    }

    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InternalError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error must abort the run before any package work starts.
    pub fn is_precondition_failure(&self) -> bool {
        matches!(
            self,
            Self::EnvironmentMisconfigured { .. } | Self::ManifestUnreadable { .. }
        )
    }
}

impl From<std::io::Error> for GopinError {
    fn from(error: std::io::Error) -> Self {
        Self::FileSystemError {
            message: "File system operation failed".to_string(),
            path: None,
            source: Some(error),
        }
    }
}

impl From<anyhow::Error> for GopinError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal_error(format!("Anyhow error: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_misconfigured_display() {
        let error = GopinError::environment_misconfigured("GOPATH is not set");
        assert_eq!(
            error.to_string(),
            "Environment misconfigured: GOPATH is not set"
        );
        assert!(error.is_precondition_failure());
    }

    #[test]
    fn test_manifest_unreadable_with_path() {
        let error = GopinError::manifest_unreadable("/tmp/Godeps", "no such file");
        if let GopinError::ManifestUnreadable { path, .. } = &error {
            assert_eq!(path, &PathBuf::from("/tmp/Godeps"));
        } else {
            panic!("Expected ManifestUnreadable");
        }
        assert!(error.is_precondition_failure());
    }

    #[test]
    fn test_command_failed_display() {
        let error = GopinError::command_failed("git checkout -q v1.0", 128, "unknown revision");
        assert_eq!(
            error.to_string(),
            "Command execution failed: git checkout -q v1.0, exit code: 128, stderr: unknown revision"
        );
    }

    #[test]
    fn test_pin_failed_display_names_package_and_vcs() {
        let error = GopinError::pin_failed(
            "github.com/foo/bar",
            "git",
            "v9.9.9",
            "fatal: reference is not a tree",
        );
        assert_eq!(
            error.to_string(),
            "Pin of 'github.com/foo/bar' to revision 'v9.9.9' failed (git): fatal: reference is not a tree"
        );
        assert!(!error.is_precondition_failure());
    }

    #[test]
    fn test_checkout_failed_is_not_precondition() {
        let error = GopinError::CheckoutFailed {
            failed: 1,
            total: 3,
        };
        assert!(!error.is_precondition_failure());
        assert_eq!(error.to_string(), "Checkout failed for 1 of 3 packages");
    }

    #[test]
    fn test_error_conversion_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let gopin_error: GopinError = io_error.into();
        assert!(matches!(gopin_error, GopinError::FileSystemError { .. }));
    }
}
