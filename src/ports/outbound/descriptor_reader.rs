use crate::shared::Result;
use std::path::Path;

/// DescriptorReader port for reading descriptor file contents
///
/// This port abstracts the file system access needed to load pom.xml text
/// for position lookups.
pub trait DescriptorReader {
    /// Reads the descriptor file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read.
    fn read_descriptor(&self, path: &Path) -> Result<String>;
}
