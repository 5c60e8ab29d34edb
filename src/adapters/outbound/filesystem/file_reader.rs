use crate::ports::outbound::DescriptorReader;
use crate::shared::error::PomscopeError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum descriptor size; a pom.xml larger than this is not a real one.
const MAX_DESCRIPTOR_SIZE: u64 = 10 * 1024 * 1024;

/// FileSystemReader adapter for reading descriptor files
///
/// Implements the DescriptorReader port with the usual safety checks:
/// symbolic links are rejected and oversized files are refused.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
        PomscopeError::DescriptorReadError {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorReader for FileSystemReader {
    fn read_descriptor(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| Self::read_error(path, e.to_string()))?;

        if metadata.is_symlink() {
            return Err(Self::read_error(
                path,
                "descriptor is a symbolic link; symbolic links are not followed",
            ));
        }
        if !metadata.is_file() {
            return Err(Self::read_error(path, "not a regular file"));
        }
        if metadata.len() > MAX_DESCRIPTOR_SIZE {
            return Err(Self::read_error(
                path,
                format!(
                    "descriptor is too large ({} bytes, limit {})",
                    metadata.len(),
                    MAX_DESCRIPTOR_SIZE
                ),
            ));
        }

        fs::read_to_string(path).map_err(|e| Self::read_error(path, e.to_string()))
    }
}
