use crate::common::error::GopinError;
use crate::common::result::GopinResult;
use crate::domain::entities::manifest::{DependencyEntry, Manifest};
use crate::infrastructure::process::CommandRunner;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::application::services::environment_service::GO_TOOL;

/// Fetch driver configuration
#[derive(Debug, Clone)]
pub struct FetchPackagesConfig {
    /// Maximum number of concurrent fetches (None: min of entry count and CPUs)
    pub jobs: Option<usize>,

    /// Print per-package progress
    pub verbose: bool,
}

impl Default for FetchPackagesConfig {
    fn default() -> Self {
        Self {
            jobs: None,
            verbose: false,
        }
    }
}

impl FetchPackagesConfig {
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Outcome of one package fetch
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub entry: DependencyEntry,
    pub error: Option<String>,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of a fetch stage: one outcome per manifest entry
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    pub outcomes: Vec<FetchOutcome>,
}

impl FetchReport {
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    pub fn failed_outcomes(&self) -> Vec<&FetchOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success()).collect()
    }

    /// Convert the report into the stage's aggregate result. The stage runs
    /// every entry to completion first; the pipeline stops here if anything
    /// failed.
    pub fn into_result(self) -> GopinResult<Self> {
        if self.failure_count() > 0 {
            Err(GopinError::FetchFailed {
                failed: self.failure_count(),
                total: self.outcomes.len(),
            })
        } else {
            Ok(self)
        }
    }
}

/// Fetch driver: fetch-and-update every manifest entry via `go get`, one
/// concurrent task per entry, joined before the stage returns.
pub struct FetchPackagesUseCase {
    config: FetchPackagesConfig,
}

impl FetchPackagesUseCase {
    pub fn new(config: FetchPackagesConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, manifest: &Manifest) -> FetchReport {
        let entries = &manifest.entries;
        if entries.is_empty() {
            return FetchReport::default();
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
                let semaphore = semaphore.clone();
                let verbose = self.config.verbose;

                tokio::spawn(async move {
                    let _permit = match semaphore.acquire().await {
                        Ok(permit) => permit,
                        Err(e) => {
                            return FetchOutcome {
                                entry,
                                error: Some(format!("failed to acquire semaphore: {}", e)),
                            }
                        }
                    };
                    let error = fetch_one(&entry, verbose).await.err().map(|e| e.to_string());
                    FetchOutcome { entry, error }
                })
            })
            .collect();

        let joined = join_all(tasks).await;

        let mut report = FetchReport::default();
        for (i, join_result) in joined.into_iter().enumerate() {
            match join_result {
                Ok(outcome) => report.outcomes.push(outcome),
                Err(join_err) => report.outcomes.push(FetchOutcome {
                    entry: entries[i].clone(),
                    error: Some(format!("fetch task panicked: {}", join_err)),
                }),
            }
        }
        report
    }
}

async fn fetch_one(entry: &DependencyEntry, verbose: bool) -> GopinResult<()> {
    if verbose {
        println!(">> Fetching {}", entry.import_path);
    }
    tracing::debug!(package = %entry.import_path, "fetching");

    // -d: download only, no install; -u: update an existing clone.
    let runner = CommandRunner::new();
    runner
        .run_checked(GO_TOOL, &["get", "-u", "-d", entry.import_path.as_str()], None)
        .await?;
    Ok(())
}
