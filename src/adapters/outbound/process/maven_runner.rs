use super::maven_command::MavenCommand;
use crate::ports::outbound::{MavenInvocation, MavenRunner};
use crate::shared::error::PomscopeError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// SubprocessMavenRunner adapter - Maven invocations via tokio subprocesses
///
/// Implements the MavenRunner port on top of [`MavenCommand`]. The timeout
/// applies per invocation; the port contract itself imposes none.
pub struct SubprocessMavenRunner {
    executable: String,
    timeout: Option<Duration>,
}

impl SubprocessMavenRunner {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            timeout: Some(Duration::from_secs(300)),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(&self) -> MavenCommand {
        MavenCommand::new(&self.executable).with_timeout(self.timeout)
    }
}

#[async_trait]
impl MavenRunner for SubprocessMavenRunner {
    async fn probe_version(&self) -> Result<String> {
        let command_line = format!("{} -version", self.executable);
        let invocation = self
            .command()
            .arg("-version")
            .execute()
            .await
            .map_err(|e| PomscopeError::MavenUnavailable {
                command: command_line.clone(),
                details: format!("{e:#}"),
            })?;

        if !invocation.success {
            return Err(PomscopeError::MavenUnavailable {
                command: command_line,
                details: invocation.stderr,
            }
            .into());
        }

        Ok(invocation
            .stdout
            .lines()
            .next()
            .unwrap_or_default()
            .to_string())
    }

    async fn run_goal(&self, working_dir: &Path, args: &[String]) -> Result<MavenInvocation> {
        self.command()
            .args(args.iter().cloned())
            .current_dir(working_dir)
            .execute()
            .await
    }
}
