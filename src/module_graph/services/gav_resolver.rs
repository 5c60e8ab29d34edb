use crate::module_graph::domain::MavenCoordinate;
use crate::ports::outbound::MavenRunner;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A resolved (module GAV, parent GAV) pair.
pub type GavPair = (MavenCoordinate, MavenCoordinate);

/// One JSON line of GAV reader plugin output.
#[derive(Debug, Deserialize)]
struct ReaderLine {
    #[serde(rename = "pomPath")]
    pom_path: String,
    #[serde(default)]
    gav: String,
    #[serde(rename = "parentGav", default)]
    parent_gav: String,
}

/// Cache of descriptor path to resolved GAV pair.
///
/// Owned by the [`GavResolver`], which is the single writer; a single reader
/// invocation reports every descriptor its reactor touched, so one cache
/// miss can warm the cache for many other pending paths.
#[derive(Debug, Default)]
pub struct GavCache {
    entries: HashMap<PathBuf, GavPair>,
}

impl GavCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<&GavPair> {
        self.entries.get(path)
    }

    pub fn insert(&mut self, path: PathBuf, pair: GavPair) {
        self.entries.insert(path, pair);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// GavResolver service - descriptor path to (module GAV, parent GAV)
///
/// On a cache miss the GAV reader goal runs once with the descriptor's
/// directory as working directory and the cache is bulk-populated from every
/// line it returns. Resolution failures are non-fatal: the caller treats an
/// empty pair as "skip this descriptor".
pub struct GavResolver {
    cache: GavCache,
    reader_plugin: String,
}

impl GavResolver {
    /// # Arguments
    /// * `reader_plugin` - plugin coordinate the `gav` goal is invoked on,
    ///   e.g. `com.pomscope:gav-reader-maven-plugin:1.0.0`
    pub fn new(reader_plugin: impl Into<String>) -> Self {
        Self {
            cache: GavCache::new(),
            reader_plugin: reader_plugin.into(),
        }
    }

    pub fn cache(&self) -> &GavCache {
        &self.cache
    }

    pub async fn resolve<R: MavenRunner>(&mut self, pom_path: &Path, runner: &R) -> GavPair {
        if let Some(pair) = self.cache.get(pom_path) {
            return pair.clone();
        }

        let working_dir = pom_path.parent().unwrap_or_else(|| Path::new("."));
        let args = vec![format!("{}:gav", self.reader_plugin), "-q".to_string()];

        match runner.run_goal(working_dir, &args).await {
            Ok(invocation) if invocation.success => {
                self.warm_cache(&invocation.stdout);
                match self.cache.get(pom_path) {
                    Some(pair) => pair.clone(),
                    None => {
                        tracing::warn!(
                            "GAV reader output did not cover {}",
                            pom_path.display()
                        );
                        empty_pair()
                    }
                }
            }
            Ok(invocation) => {
                self.report_failure(pom_path, &strip_bracket_tags(&invocation.stderr));
                empty_pair()
            }
            Err(e) => {
                self.report_failure(pom_path, &format!("{e:#}"));
                empty_pair()
            }
        }
    }

    /// Bulk-inserts every descriptor the reactor reported. Backslashes are
    /// escaped before decoding to tolerate Windows paths embedded in the
    /// payload.
    fn warm_cache(&mut self, stdout: &str) {
        for line in stdout.lines() {
            let line = line.trim();
            if !line.starts_with('{') {
                continue;
            }
            let escaped = line.replace('\\', "\\\\");
            match serde_json::from_str::<ReaderLine>(&escaped) {
                Ok(record) => {
                    self.cache.insert(
                        PathBuf::from(&record.pom_path),
                        (
                            MavenCoordinate::from_gav(&record.gav),
                            MavenCoordinate::from_gav(&record.parent_gav),
                        ),
                    );
                }
                Err(e) => {
                    tracing::warn!("unparseable GAV reader line {line:?}: {e}");
                }
            }
        }
    }

    fn report_failure(&self, pom_path: &Path, details: &str) {
        tracing::warn!(
            "could not resolve GAV for {}: {}\nIf the GAV reader plugin is missing, \
             install it via a clean build from the plugin directory.",
            pom_path.display(),
            details
        );
    }
}

fn empty_pair() -> GavPair {
    (MavenCoordinate::empty(), MavenCoordinate::empty())
}

/// Strips `[INFO]`/`[ERROR]`-style bracket tags from a captured Maven error
/// stream before it is surfaced to the user.
pub(crate) fn strip_bracket_tags(stderr: &str) -> String {
    stderr
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            match trimmed.strip_prefix('[').and(trimmed.find(']')) {
                Some(end) => trimmed[end + 1..].trim_start(),
                None => trimmed,
            }
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
