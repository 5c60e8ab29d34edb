use async_trait::async_trait;
use pomscope::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock MavenRunner scripted per goal and working directory
///
/// GAV reader invocations are answered from `gav_outputs`, dependency:tree
/// invocations from `tree_outputs`, both keyed by working directory. A
/// directory without a scripted answer fails the invocation (non-zero exit),
/// mirroring an unbuildable module. Clones share the invocation log, so a
/// test can keep one clone and hand the other to the use case.
#[derive(Clone)]
pub struct MockMavenRunner {
    version_banner: Option<String>,
    gav_outputs: HashMap<PathBuf, String>,
    tree_outputs: HashMap<PathBuf, String>,
    invocations: Arc<Mutex<Vec<(PathBuf, Vec<String>)>>>,
}

impl MockMavenRunner {
    pub fn new() -> Self {
        Self {
            version_banner: Some("Apache Maven 3.9.6 (mock)".to_string()),
            gav_outputs: HashMap::new(),
            tree_outputs: HashMap::new(),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A runner whose availability probe fails.
    pub fn unavailable() -> Self {
        Self {
            version_banner: None,
            ..Self::new()
        }
    }

    pub fn with_gav_output(mut self, working_dir: &str, stdout: &str) -> Self {
        self.gav_outputs
            .insert(PathBuf::from(working_dir), stdout.to_string());
        self
    }

    pub fn with_tree_output(mut self, working_dir: &str, stdout: &str) -> Self {
        self.tree_outputs
            .insert(PathBuf::from(working_dir), stdout.to_string());
        self
    }

    pub fn invocations(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.invocations.lock().unwrap().clone()
    }
}

impl Default for MockMavenRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MavenRunner for MockMavenRunner {
    async fn probe_version(&self) -> Result<String> {
        match &self.version_banner {
            Some(banner) => Ok(banner.clone()),
            None => anyhow::bail!("Maven executable is not available: mvn -version"),
        }
    }

    async fn run_goal(&self, working_dir: &Path, args: &[String]) -> Result<MavenInvocation> {
        self.invocations
            .lock()
            .unwrap()
            .push((working_dir.to_path_buf(), args.to_vec()));

        if args.iter().any(|a| a.ends_with(":gav")) {
            return Ok(match self.gav_outputs.get(working_dir) {
                Some(stdout) => MavenInvocation::succeeded(stdout.clone()),
                None => MavenInvocation::failed("[ERROR] GAV reader plugin not available"),
            });
        }
        if args.iter().any(|a| a == "dependency:tree") {
            return Ok(match self.tree_outputs.get(working_dir) {
                Some(stdout) => MavenInvocation::succeeded(stdout.clone()),
                None => MavenInvocation::failed("[ERROR] Could not resolve dependencies"),
            });
        }
        if args.iter().any(|a| a.contains("install-file")) {
            return Ok(MavenInvocation::succeeded(""));
        }
        Ok(MavenInvocation::failed("[ERROR] Unknown goal"))
    }
}
