use crate::common::error::GopinError;
use crate::common::result::GopinResult;
use crate::domain::entities::manifest::Manifest;
use crate::infrastructure::process::CommandRunner;

use crate::application::services::environment_service::GO_TOOL;

/// Install driver configuration
#[derive(Debug, Clone, Default)]
pub struct InstallPackagesConfig {
    /// Print per-package progress
    pub verbose: bool,
}

impl InstallPackagesConfig {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Result of the install stage
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    pub installed_count: usize,
}

/// Install driver: `go install` every manifest entry, strictly sequentially
/// and in manifest order. The revision field is ignored here; checkout
/// already pinned each working copy.
pub struct InstallPackagesUseCase {
    config: InstallPackagesConfig,
}

impl InstallPackagesUseCase {
    pub fn new(config: InstallPackagesConfig) -> Self {
        Self { config }
    }

    /// Run the installs, stopping at the first failure.
    pub async fn execute(&self, manifest: &Manifest) -> GopinResult<InstallReport> {
        let runner = CommandRunner::new();
        let mut report = InstallReport::default();

        for entry in &manifest.entries {
            if self.config.verbose {
                println!(">> Installing {}", entry.import_path);
            }
            tracing::debug!(package = %entry.import_path, "installing");

            runner
                .run_checked(GO_TOOL, &["install", entry.import_path.as_str()], None)
                .await
                .map_err(|e| {
                    GopinError::install_failed(entry.import_path.as_str(), e.to_string())
                })?;
            report.installed_count += 1;
        }

        Ok(report)
    }
}
