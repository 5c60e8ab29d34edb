use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// Captured result of one Maven invocation.
///
/// A non-zero exit is reported through `success`, not as an `Err`: most
/// per-module failures are non-fatal and the caller decides what to do with
/// the captured error stream.
#[derive(Debug, Clone)]
pub struct MavenInvocation {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl MavenInvocation {
    pub fn succeeded(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// MavenRunner port for invoking the external build tool
///
/// This port abstracts the Maven subprocess. Invocations are blocking calls
/// with no timeout in the port contract itself; adapters may impose one.
#[async_trait]
pub trait MavenRunner {
    /// Probes `mvn -version` to check the tool is reachable.
    ///
    /// # Returns
    /// The version banner on success.
    ///
    /// # Errors
    /// Returns an error if the executable cannot be run or exits non-zero.
    /// This is the one failure that is fatal to a whole-workspace scan.
    async fn probe_version(&self) -> Result<String>;

    /// Runs a Maven goal with the given working directory.
    ///
    /// # Arguments
    /// * `working_dir` - Directory the build runs from (a module directory)
    /// * `args` - Goal and flags, e.g. `["dependency:tree", "-q"]`
    ///
    /// # Errors
    /// Returns an error only when the process cannot be spawned or times
    /// out; a non-zero exit is reported via [`MavenInvocation::success`].
    async fn run_goal(&self, working_dir: &Path, args: &[String]) -> Result<MavenInvocation>;
}
