use crate::common::error::GopinError;
use crate::common::result::GopinResult;
use crate::domain::entities::manifest::{DependencyEntry, Manifest};
use crate::domain::entities::workspace::GoWorkspace;
use crate::infrastructure::vcs::{lock, VcsError, VcsFactory};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Checkout driver configuration
#[derive(Debug, Clone)]
pub struct CheckoutRevisionsConfig {
    /// Maximum number of concurrent checkouts (None: min of entry count and CPUs)
    pub jobs: Option<usize>,

    /// Print per-package progress
    pub verbose: bool,
}

impl Default for CheckoutRevisionsConfig {
    fn default() -> Self {
        Self {
            jobs: None,
            verbose: false,
        }
    }
}

impl CheckoutRevisionsConfig {
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Outcome of one package checkout
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    pub entry: DependencyEntry,
    pub error: Option<String>,
}

impl CheckoutOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of a checkout stage: one outcome per manifest entry
#[derive(Debug, Clone, Default)]
pub struct CheckoutReport {
    pub outcomes: Vec<CheckoutOutcome>,
}

impl CheckoutReport {
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    pub fn failed_outcomes(&self) -> Vec<&CheckoutOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success()).collect()
    }

    /// Convert the report into the stage's aggregate result.
    pub fn into_result(self) -> GopinResult<Self> {
        if self.failure_count() > 0 {
            Err(GopinError::CheckoutFailed {
                failed: self.failure_count(),
                total: self.outcomes.len(),
            })
        } else {
            Ok(self)
        }
    }
}

/// Checkout driver: pin every manifest entry's working copy to its revision.
///
/// Entries run as independent tasks joined before the stage completes. Two
/// entries resolving to the same working copy race; the lock wait below only
/// guards against VCS operations already in flight, not against each other.
pub struct CheckoutRevisionsUseCase {
    config: CheckoutRevisionsConfig,
}

impl CheckoutRevisionsUseCase {
    pub fn new(config: CheckoutRevisionsConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, manifest: &Manifest, workspace: &GoWorkspace) -> CheckoutReport {
        let entries = &manifest.entries;
        if entries.is_empty() {
            return CheckoutReport::default();
        }

        let max_parallel = self
            .config
            .jobs
            .unwrap_or_else(|| std::cmp::min(entries.len(), num_cpus::get()));
        let semaphore = Arc::new(Semaphore::new(max_parallel));

        let tasks: Vec<_> = entries
            .iter()
            .map(|entry| {
                let entry = entry.clone();
                let workspace = workspace.clone();
                let semaphore = semaphore.clone();
                let verbose = self.config.verbose;

                tokio::spawn(async move {
                    let _permit = match semaphore.acquire().await {
                        Ok(permit) => permit,
                        Err(e) => {
                            return CheckoutOutcome {
                                entry,
                                error: Some(format!("failed to acquire semaphore: {}", e)),
                            }
                        }
                    };
                    let error = checkout_one(&entry, &workspace, verbose)
                        .await
                        .err()
                        .map(|e| e.to_string());
                    CheckoutOutcome { entry, error }
                })
            })
            .collect();

        let joined = join_all(tasks).await;

        let mut report = CheckoutReport::default();
        for (i, join_result) in joined.into_iter().enumerate() {
            match join_result {
                Ok(outcome) => report.outcomes.push(outcome),
                Err(join_err) => report.outcomes.push(CheckoutOutcome {
                    entry: entries[i].clone(),
                    error: Some(format!("checkout task panicked: {}", join_err)),
                }),
            }
        }
        report
    }
}

async fn checkout_one(
    entry: &DependencyEntry,
    workspace: &GoWorkspace,
    verbose: bool,
) -> GopinResult<()> {
    let package_dir = workspace.package_dir(&entry.import_path);

    // Best-effort wait for any in-flight VCS operation to vacate the
    // working copy.
    lock::wait_until_free(&package_dir).await;

    let vcs_type = VcsFactory::detect_vcs_type(&package_dir)
        .ok_or_else(|| GopinError::vcs_undetected(&package_dir))?;

    if verbose {
        println!(
            ">> Setting {} to version {}",
            entry.import_path, entry.revision
        );
    }
    tracing::debug!(
        package = %entry.import_path,
        revision = %entry.revision,
        vcs = %vcs_type,
        "pinning working copy"
    );

    let vcs = VcsFactory::create_vcs(vcs_type);
    vcs.check_availability().await.map_err(|e| match e {
        VcsError::ExecutableNotFound { executable } => GopinError::environment_misconfigured(
            format!("{} is currently not installed or in your PATH", executable),
        ),
        other => GopinError::internal_error(format!(
            "availability check for {} failed: {}",
            vcs_type, other
        )),
    })?;

    vcs.pin_revision(&package_dir, &entry.revision)
        .await
        .map_err(|e| match e {
            VcsError::PinFailed {
                vcs,
                revision,
                message,
            } => GopinError::pin_failed(
                entry.import_path.as_str(),
                vcs.to_string(),
                revision,
                message,
            ),
            VcsError::CommandFailed {
                command,
                exit_code,
                stderr,
            } => GopinError::command_failed(command, exit_code, stderr),
            other => GopinError::internal_error(format!(
                "checkout of {} failed: {}",
                entry.import_path, other
            )),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::import_path::ImportPath;
    use tempfile::TempDir;

    fn entry(path: &str, rev: &str) -> DependencyEntry {
        DependencyEntry::new(ImportPath::new(path).unwrap(), rev)
    }

    #[test]
    fn test_report_into_result_fails_on_any_failure() {
        let report = CheckoutReport {
            outcomes: vec![
                CheckoutOutcome {
                    entry: entry("github.com/a/b", "v1"),
                    error: None,
                },
                CheckoutOutcome {
                    entry: entry("github.com/c/d", "v2"),
                    error: Some("unknown revision".to_string()),
                },
            ],
        };
        assert!(matches!(
            report.into_result(),
            Err(GopinError::CheckoutFailed {
                failed: 1,
                total: 2
            })
        ));
    }

    #[tokio::test]
    async fn test_checkout_fails_without_vcs_metadata() {
        let gopath = TempDir::new().unwrap();
        let workspace = GoWorkspace::new(gopath.path());
        std::fs::create_dir_all(gopath.path().join("src/github.com/a/b")).unwrap();

        let manifest = Manifest {
            entries: vec![entry("github.com/a/b", "v1.0")],
        };
        let use_case = CheckoutRevisionsUseCase::new(CheckoutRevisionsConfig::default());
        let report = use_case.execute(&manifest, &workspace).await;

        assert_eq!(report.failure_count(), 1);
        let failed = report.failed_outcomes();
        assert!(failed[0]
            .error
            .as_ref()
            .unwrap()
            .contains("No supported VCS"));
    }

    #[tokio::test]
    async fn test_execute_empty_manifest_spawns_nothing() {
        let gopath = TempDir::new().unwrap();
        let workspace = GoWorkspace::new(gopath.path());
        let use_case = CheckoutRevisionsUseCase::new(CheckoutRevisionsConfig::default());
        let report = use_case
            .execute(&Manifest { entries: vec![] }, &workspace)
            .await;
        assert!(report.outcomes.is_empty());
    }
}
