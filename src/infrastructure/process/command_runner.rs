use crate::common::error::GopinError;
use crate::common::result::GopinResult;
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;

/// Async runner for the external tools gopin drives: the `go` toolchain and
/// the four VCS clients. Output is captured, never inherited, so subprocess
/// chatter stays out of gopin's own output.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Execute a command, capturing stdout and stderr.
    pub async fn run(
        &self,
        program: &str,
        args: &[&str],
        working_dir: Option<&Path>,
    ) -> GopinResult<Output> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(program, ?args, "spawning command");
        let output = cmd.output().await.map_err(|e| {
            GopinError::internal_error_with_source(
                format!("failed to execute '{}'", program),
                e,
            )
        })?;
        Ok(output)
    }

    /// Execute a command and map a non-zero exit status to a typed error
    /// carrying the command line, exit code, and stderr.
    pub async fn run_checked(
        &self,
        program: &str,
        args: &[&str],
        working_dir: Option<&Path>,
    ) -> GopinResult<String> {
        let output = self.run(program, args, working_dir).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let command = format!("{} {}", program, args.join(" "));
            return Err(GopinError::command_failed(
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Probe whether a tool is on the execution path by running its version
    /// subcommand.
    pub async fn check_tool_available(&self, program: &str, version_arg: &str) -> bool {
        match self.run(program, &[version_arg], None).await {
            Ok(output) => output.status.success(),
            Err(_) => false,
        }
    }
}
