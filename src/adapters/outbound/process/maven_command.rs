use crate::ports::outbound::MavenInvocation;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Default per-invocation timeout. Dependency resolution against a cold
/// local repository can legitimately take minutes.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Fluent builder for Maven invocations with captured output.
///
/// Non-zero exits are reported through [`MavenInvocation::success`] rather
/// than as errors; only spawn failures and timeouts produce an `Err`.
///
/// # Examples
///
/// ```no_run
/// use pomscope::adapters::outbound::process::MavenCommand;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let invocation = MavenCommand::new("mvn")
///     .args(["dependency:tree", "-q"])
///     .current_dir(Path::new("/workspace/app"))
///     .execute()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct MavenCommand {
    executable: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    timeout_duration: Option<Duration>,
}

impl MavenCommand {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            args: Vec::new(),
            current_dir: None,
            timeout_duration: Some(DEFAULT_TIMEOUT),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Overrides the timeout; `None` waits indefinitely.
    pub const fn with_timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout_duration = duration;
        self
    }

    /// Runs the command to completion and captures its output.
    pub async fn execute(self) -> Result<MavenInvocation> {
        let mut cmd = Command::new(&self.executable);
        cmd.args(&self.args);
        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!(
            target: "maven",
            "Executing command: {} {} (cwd: {})",
            self.executable,
            self.args.join(" "),
            self.current_dir
                .as_deref()
                .unwrap_or_else(|| Path::new("."))
                .display()
        );

        let output_future = cmd.output();
        let output = match self.timeout_duration {
            Some(duration) => match timeout(duration, output_future).await {
                Ok(result) => result.with_context(|| {
                    format!("Failed to execute {} {}", self.executable, self.args.join(" "))
                })?,
                Err(_) => {
                    tracing::warn!(
                        target: "maven",
                        "Command timed out after {} seconds: {} {}",
                        duration.as_secs(),
                        self.executable,
                        self.args.join(" ")
                    );
                    anyhow::bail!(
                        "{} {} timed out after {} seconds",
                        self.executable,
                        self.args.join(" "),
                        duration.as_secs()
                    );
                }
            },
            None => output_future.await.with_context(|| {
                format!("Failed to execute {} {}", self.executable, self.args.join(" "))
            })?,
        };

        if !output.status.success() {
            tracing::debug!(
                target: "maven",
                "Command failed with exit code {:?}",
                output.status.code()
            );
        }

        Ok(MavenInvocation {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
