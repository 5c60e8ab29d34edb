use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// DescriptorFinder port for locating pom.xml files under a workspace root
///
/// This port abstracts the recursive file search. Searches for different
/// roots are independent read-only operations and may run concurrently.
#[async_trait]
pub trait DescriptorFinder {
    /// Finds every descriptor file reachable from `root`.
    ///
    /// # Arguments
    /// * `root` - Directory to search recursively
    /// * `exclude_patterns` - Directory name patterns to skip (wildcards: *)
    ///
    /// # Returns
    /// The descriptor paths found, in no particular order. An empty vector
    /// when nothing is found, never an error for that case.
    async fn find_descriptors(
        &self,
        root: &Path,
        exclude_patterns: &[String],
    ) -> Result<Vec<PathBuf>>;
}
