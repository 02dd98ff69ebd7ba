use crate::domain::value_objects::vcs_type::VcsType;
use async_trait::async_trait;
use std::path::Path;

/// Common interface for the revision-pinning operations gopin needs from a
/// version control client.
#[async_trait]
pub trait VcsOperations: Send + Sync {
    /// Set the working copy at `repo_path` to `revision`, quietly.
    ///
    /// The revision string is handed to the client verbatim; an empty
    /// revision is not special-cased here.
    async fn pin_revision(&self, repo_path: &Path, revision: &str) -> Result<(), VcsError>;

    /// Check if a directory is a working copy owned by this VCS
    fn is_repository(&self, path: &Path) -> bool;

    /// Get the VCS type this implementation handles
    fn vcs_type(&self) -> VcsType;

    /// Check if the client executable is available on the execution path
    async fn check_availability(&self) -> Result<(), VcsError>;
}

/// Errors that can occur during VCS operations
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    #[error("Working copy not found at path: {path}")]
    RepositoryNotFound { path: String },

    #[error("Pin to revision '{revision}' failed ({vcs}): {message}")]
    PinFailed {
        vcs: VcsType,
        revision: String,
        message: String,
    },

    #[error("VCS executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("Command execution failed: {command}, exit code: {exit_code}, stderr: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl VcsError {
    /// Create a pin failed error
    pub fn pin_failed(vcs: VcsType, revision: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PinFailed {
            vcs,
            revision: revision.into(),
            message: message.into(),
        }
    }

    /// Create an executable not found error
    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }

    /// Create a command failed error
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

    /// Create a repository not found error
    pub fn repository_not_found(path: &Path) -> Self {
        Self::RepositoryNotFound {
            path: path.display().to_string(),
        }
    }
}
