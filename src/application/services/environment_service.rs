use crate::common::error::GopinError;
use crate::common::result::GopinResult;
use crate::domain::entities::manifest::Manifest;
use crate::domain::entities::workspace::GoWorkspace;
use crate::infrastructure::process::CommandRunner;
use std::path::{Path, PathBuf};

/// Name of the Go toolchain executable
pub const GO_TOOL: &str = "go";

/// Everything a run needs, resolved once at startup: the workspace, the
/// parsed manifest, and the manifest path it came from. Drivers receive this
/// instead of reading the environment themselves.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub workspace: GoWorkspace,
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
}

/// Startup precondition checks and context construction
pub struct EnvironmentService {
    runner: CommandRunner,
}

impl EnvironmentService {
    pub fn new() -> Self {
        Self {
            runner: CommandRunner::new(),
        }
    }

    /// Verify the environment and load the manifest.
    ///
    /// Both checks are fatal and happen before any fetch starts: the `go`
    /// tool must answer `go version`, GOPATH must be set and non-empty, and
    /// the manifest must be readable.
    pub async fn prepare(&self, manifest_path: &Path) -> GopinResult<RunContext> {
        if !self.runner.check_tool_available(GO_TOOL, "version").await {
            return Err(GopinError::environment_misconfigured(
                "Go is currently not installed or in your PATH",
            ));
        }

        let workspace = GoWorkspace::from_env()?;
        let manifest = Manifest::load(manifest_path)?;

        Ok(RunContext {
            workspace,
            manifest,
            manifest_path: manifest_path.to_path_buf(),
        })
    }
}

impl Default for EnvironmentService {
    fn default() -> Self {
        Self::new()
    }
}
