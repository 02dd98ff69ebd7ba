use super::vcs_interface::{VcsError, VcsOperations};
use crate::domain::value_objects::vcs_type::VcsType;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Bazaar implementation of the pinning operations
pub struct BzrVcs {
    executable: String,
}

impl Default for BzrVcs {
    fn default() -> Self {
        Self {
            executable: VcsType::Bzr.executable_name().to_string(),
        }
    }
}

impl BzrVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    async fn execute_bzr_command(
        &self,
        args: &[&str],
        working_dir: &Path,
    ) -> Result<(), VcsError> {
        let output = Command::new(&self.executable)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let command = format!("{} {}", self.executable, args.join(" "));
            return Err(VcsError::command_failed(
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl VcsOperations for BzrVcs {
    async fn pin_revision(&self, repo_path: &Path, revision: &str) -> Result<(), VcsError> {
        if !self.is_repository(repo_path) {
            return Err(VcsError::repository_not_found(repo_path));
        }

        let args = VcsType::Bzr.pin_args(revision);
        let args: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
        self.execute_bzr_command(&args, repo_path)
            .await
            .map_err(|e| match e {
                VcsError::CommandFailed { stderr, .. } => {
                    VcsError::pin_failed(VcsType::Bzr, revision, stderr)
                }
                other => other,
            })
    }

    fn is_repository(&self, path: &Path) -> bool {
        path.join(VcsType::Bzr.metadata_dir()).exists()
    }

    fn vcs_type(&self) -> VcsType {
        VcsType::Bzr
    }

    async fn check_availability(&self) -> Result<(), VcsError> {
        let output = Command::new(&self.executable)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    VcsError::executable_not_found(&self.executable)
                } else {
                    VcsError::from(e)
                }
            })?;

        if !output.status.success() {
            return Err(VcsError::executable_not_found(&self.executable));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_availability_reports_missing_executable() {
        let vcs = BzrVcs::with_executable("bzr-missing-for-test");
        let err = vcs.check_availability().await.unwrap_err();
        assert!(matches!(err, VcsError::ExecutableNotFound { .. }));
    }

    #[test]
    fn test_is_repository_requires_metadata_dir() {
        let dir = tempfile::tempdir().unwrap();
        let vcs = BzrVcs::new();
        assert!(!vcs.is_repository(dir.path()));
        std::fs::create_dir(dir.path().join(VcsType::Bzr.metadata_dir())).unwrap();
        assert!(vcs.is_repository(dir.path()));
    }
}
