use super::gav_resolver::strip_bracket_tags;
use crate::ports::outbound::MavenRunner;
use std::path::{Path, PathBuf};

const INSTALL_GOAL: &str = "org.apache.maven.plugins:maven-install-plugin:install-file";

/// InstallGuard - one-shot installation of the GAV reader plugin
///
/// The guard records whether installation already ran and is threaded
/// explicitly through the orchestrator into the tree builder, so there is no
/// hidden process-wide state. A failed install is logged and left to surface
/// through the per-descriptor resolution failures that follow.
#[derive(Debug)]
pub struct InstallGuard {
    reader_jar: Option<PathBuf>,
    ensured: bool,
}

impl InstallGuard {
    /// # Arguments
    /// * `reader_jar` - path to the reader plugin jar to install into the
    ///   local repository; `None` when the plugin is expected to already be
    ///   resolvable.
    pub fn new(reader_jar: Option<PathBuf>) -> Self {
        Self {
            reader_jar,
            ensured: false,
        }
    }

    pub fn already_ensured(&self) -> bool {
        self.ensured
    }

    /// Installs the reader jar on the first call; every later call is a
    /// no-op regardless of the outcome.
    pub async fn ensure<R: MavenRunner>(&mut self, runner: &R) {
        if self.ensured {
            return;
        }
        self.ensured = true;

        let Some(jar) = self.reader_jar.clone() else {
            return;
        };

        let args = vec![
            INSTALL_GOAL.to_string(),
            format!("-Dfile={}", jar.display()),
        ];
        let working_dir = jar.parent().unwrap_or_else(|| Path::new("."));

        match runner.run_goal(working_dir, &args).await {
            Ok(invocation) if invocation.success => {
                tracing::debug!("installed GAV reader plugin from {}", jar.display());
            }
            Ok(invocation) => {
                tracing::warn!(
                    "failed to install GAV reader plugin from {}: {}",
                    jar.display(),
                    strip_bracket_tags(&invocation.stderr)
                );
            }
            Err(e) => {
                tracing::warn!(
                    "failed to install GAV reader plugin from {}: {e:#}",
                    jar.display()
                );
            }
        }
    }
}
