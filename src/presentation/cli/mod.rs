use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::exit;

use crate::application::services::environment_service::{EnvironmentService, RunContext};
use crate::application::use_cases::{
    checkout_revisions::{CheckoutRevisionsConfig, CheckoutRevisionsUseCase},
    fetch_packages::{FetchPackagesConfig, FetchPackagesUseCase},
    install_packages::{InstallPackagesConfig, InstallPackagesUseCase},
};
use crate::domain::entities::manifest::{Manifest, DEFAULT_MANIFEST_NAME};

/// Output format options for the list command
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    Text,
    /// JSON output
    Json,
}

/// gopin - pin Go package dependencies to VCS revisions
#[derive(Parser)]
#[command(name = "gopin")]
#[command(about = "Pin Go package dependencies to VCS revisions from a Godeps manifest")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Number of parallel jobs for fetch and checkout
    #[arg(short = 'j', long, global = true)]
    pub jobs: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch, pin, and install all packages (the default)
    Install {
        /// Manifest file (defaults to "Godeps" in the current directory)
        manifest: Option<String>,
    },

    /// Fetch and pin all packages without installing
    Get {
        /// Manifest file (defaults to "Godeps" in the current directory)
        manifest: Option<String>,
    },

    /// Print the parsed manifest entries
    List {
        /// Manifest file (defaults to "Godeps" in the current directory)
        manifest: Option<String>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the gopin version
    Version,

    /// Any other verb is delegated to an external `gopin-<verb>` executable
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub async fn run(self) -> Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", ">>".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> Result<()> {
        match &self.cli.command {
            // Bare `gopin` runs the full install pipeline.
            None => self.handle_install_command(None).await,
            Some(Commands::Install { manifest }) => {
                self.handle_install_command(manifest.as_deref()).await
            }
            Some(Commands::Get { manifest }) => self.handle_get_command(manifest.as_deref()).await,
            Some(Commands::List { manifest, output }) => {
                self.handle_list_command(manifest.as_deref(), output).await
            }
            Some(Commands::Version) => {
                self.handle_version_command();
                Ok(())
            }
            Some(Commands::External(args)) => self.handle_external_command(args),
        }
    }

    /// `get`: fetch then checkout, no install.
    async fn handle_get_command(&self, manifest: Option<&str>) -> Result<()> {
        let context = self.prepare(manifest).await?;
        self.run_fetch_and_checkout(&context).await?;
        println!(
            "{} {} packages pinned",
            "✓".green().bold(),
            context.manifest.len()
        );
        Ok(())
    }

    /// `install` (or no verb): fetch, checkout, then serial install.
    async fn handle_install_command(&self, manifest: Option<&str>) -> Result<()> {
        let context = self.prepare(manifest).await?;
        self.run_fetch_and_checkout(&context).await?;

        let install_config = InstallPackagesConfig::default().with_verbose(self.cli.verbose);
        let use_case = InstallPackagesUseCase::new(install_config);
        use_case.execute(&context.manifest).await?;

        println!("{} All Done", ">>".green().bold());
        Ok(())
    }

    async fn handle_list_command(
        &self,
        manifest: Option<&str>,
        output: &OutputFormat,
    ) -> Result<()> {
        let manifest_path = self.manifest_path(manifest);
        let manifest = Manifest::load(&manifest_path)?;

        match output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&manifest.entries)?);
            }
            OutputFormat::Text => {
                for entry in &manifest.entries {
                    println!("{} {}", entry.import_path, entry.revision);
                }
            }
        }
        Ok(())
    }

    fn handle_version_command(&self) {
        println!(">> gopin v{}", env!("GOPIN_VERSION"));
        if self.cli.verbose {
            println!("   commit {}", env!("GIT_HASH"));
            println!("   built  {}", env!("BUILD_DATE"));
        }
    }

    /// Delegate an unrecognized verb to an external `gopin-<verb>` executable
    /// on the PATH, forwarding the remaining arguments. On Unix the current
    /// process is replaced, so the plugin's exit code is inherited directly.
    fn handle_external_command(&self, args: &[OsString]) -> Result<()> {
        let verb = args[0].to_string_lossy().to_string();
        let plugin = format!("gopin-{}", verb);
        let plugin_args = &args[1..];

        tracing::debug!(plugin, "delegating to external command");

        let not_found = |e: &std::io::Error| e.kind() == std::io::ErrorKind::NotFound;

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // exec only returns on failure.
            let err = std::process::Command::new(&plugin).args(plugin_args).exec();
            if not_found(&err) {
                self.print_no_command(&verb);
                exit(1);
            }
            Err(anyhow::anyhow!("failed to execute '{}': {}", plugin, err))
        }

        #[cfg(not(unix))]
        {
            match std::process::Command::new(&plugin).args(plugin_args).status() {
                Ok(status) => exit(status.code().unwrap_or(1)),
                Err(ref e) if not_found(e) => {
                    self.print_no_command(&verb);
                    exit(1);
                }
                Err(e) => Err(anyhow::anyhow!("failed to execute '{}': {}", plugin, e)),
            }
        }
    }

    fn print_no_command(&self, verb: &str) {
        eprintln!("{} No command 'gopin {}'", ">>".red().bold(), verb);
        let mut command = Cli::command();
        eprintln!("{}", command.render_help());
    }

    fn manifest_path(&self, manifest: Option<&str>) -> PathBuf {
        PathBuf::from(manifest.unwrap_or(DEFAULT_MANIFEST_NAME))
    }

    /// Run the startup preconditions and load the manifest.
    async fn prepare(&self, manifest: Option<&str>) -> Result<RunContext> {
        let manifest_path = self.manifest_path(manifest);
        let service = EnvironmentService::new();
        let context = service.prepare(&manifest_path).await?;
        Ok(context)
    }

    /// The fetch barrier fully completes before checkout starts.
    async fn run_fetch_and_checkout(&self, context: &RunContext) -> Result<()> {
        println!(
            "{} Fetching {} packages...",
            "::".blue().bold(),
            context.manifest.len()
        );

        let fetch_config = FetchPackagesConfig::default().with_verbose(self.cli.verbose);
        let fetch_config = match self.cli.jobs {
            Some(jobs) => fetch_config.with_jobs(jobs),
            None => fetch_config,
        };
        let fetch_report = FetchPackagesUseCase::new(fetch_config)
            .execute(&context.manifest)
            .await;
        self.print_failures(
            "Some fetches failed:",
            fetch_report
                .failed_outcomes()
                .iter()
                .map(|o| (o.entry.import_path.as_str(), o.error.as_deref())),
        );
        let _ = fetch_report.into_result()?;

        println!("{} Checking out revisions...", "::".blue().bold());

        let checkout_config = CheckoutRevisionsConfig::default().with_verbose(self.cli.verbose);
        let checkout_config = match self.cli.jobs {
            Some(jobs) => checkout_config.with_jobs(jobs),
            None => checkout_config,
        };
        let checkout_report = CheckoutRevisionsUseCase::new(checkout_config)
            .execute(&context.manifest, &context.workspace)
            .await;
        self.print_failures(
            "Some checkouts failed:",
            checkout_report
                .failed_outcomes()
                .iter()
                .map(|o| (o.entry.import_path.as_str(), o.error.as_deref())),
        );
        let _ = checkout_report.into_result()?;

        Ok(())
    }

    fn print_failures<'a>(
        &self,
        heading: &str,
        failures: impl Iterator<Item = (&'a str, Option<&'a str>)>,
    ) {
        let failures: Vec<_> = failures.collect();
        if failures.is_empty() {
            return;
        }
        eprintln!("{} {}", "⚠".yellow().bold(), heading);
        for (package, error) in failures {
            eprintln!("  {}: {}", package.bold(), error.unwrap_or("unknown error").red());
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_default_to_install_pipeline() {
        let cli = Cli::try_parse_from(["gopin"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parses_get_with_manifest() {
        let cli = Cli::try_parse_from(["gopin", "get", "deps/Godeps"]).unwrap();
        match cli.command {
            Some(Commands::Get { manifest }) => {
                assert_eq!(manifest.as_deref(), Some("deps/Godeps"))
            }
            _ => panic!("Expected Get"),
        }
    }

    #[test]
    fn test_cli_parses_unknown_verb_as_external() {
        let cli = Cli::try_parse_from(["gopin", "graph", "--depth", "2"]).unwrap();
        match cli.command {
            Some(Commands::External(args)) => {
                assert_eq!(args[0], "graph");
                assert_eq!(args.len(), 3);
            }
            _ => panic!("Expected External"),
        }
    }

    #[test]
    fn test_cli_parses_global_jobs_flag() {
        let cli = Cli::try_parse_from(["gopin", "-j", "4", "get"]).unwrap();
        assert_eq!(cli.jobs, Some(4));
    }
}
