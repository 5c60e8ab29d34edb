use async_trait::async_trait;
use pomscope::prelude::*;
use std::path::{Path, PathBuf};

/// Mock DescriptorFinder serving a fixed listing per workspace root
#[derive(Default)]
pub struct MockDescriptorFinder {
    listings: Vec<(PathBuf, Vec<PathBuf>)>,
}

impl MockDescriptorFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: &str, descriptors: &[&str]) -> Self {
        self.listings.push((
            PathBuf::from(root),
            descriptors.iter().map(PathBuf::from).collect(),
        ));
        self
    }
}

#[async_trait]
impl DescriptorFinder for MockDescriptorFinder {
    async fn find_descriptors(
        &self,
        root: &Path,
        _exclude_patterns: &[String],
    ) -> Result<Vec<PathBuf>> {
        Ok(self
            .listings
            .iter()
            .find(|(r, _)| r == root)
            .map(|(_, descriptors)| descriptors.clone())
            .unwrap_or_default())
    }
}
