use pomscope::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock DescriptorReader serving canned descriptor text per path
#[derive(Default)]
pub struct MockDescriptorReader {
    texts: HashMap<PathBuf, String>,
}

impl MockDescriptorReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(mut self, path: &str, text: &str) -> Self {
        self.texts.insert(PathBuf::from(path), text.to_string());
        self
    }
}

impl DescriptorReader for MockDescriptorReader {
    fn read_descriptor(&self, path: &Path) -> Result<String> {
        self.texts
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock: no descriptor at {}", path.display()))
    }
}
