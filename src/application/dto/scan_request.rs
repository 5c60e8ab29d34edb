use std::path::PathBuf;

/// Plugin coordinate the GAV reader goal is resolved against by default.
pub const DEFAULT_READER_PLUGIN: &str = "com.pomscope:gav-reader-maven-plugin:1.0.0";

/// ScanRequest - Internal request DTO for the workspace scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Workspace root directories to search for descriptors
    pub roots: Vec<PathBuf>,
    /// Directory name patterns excluded from descriptor discovery
    pub exclude_patterns: Vec<String>,
    /// Coordinate of the GAV reader plugin
    pub reader_plugin: String,
    /// Optional reader plugin jar to install before scanning
    pub reader_jar: Option<PathBuf>,
}

impl ScanRequest {
    pub fn new(roots: Vec<PathBuf>, exclude_patterns: Vec<String>) -> Self {
        Self {
            roots,
            exclude_patterns,
            reader_plugin: DEFAULT_READER_PLUGIN.to_string(),
            reader_jar: None,
        }
    }

    pub fn with_reader_plugin(mut self, coordinate: impl Into<String>) -> Self {
        self.reader_plugin = coordinate.into();
        self
    }

    pub fn with_reader_jar(mut self, jar: Option<PathBuf>) -> Self {
        self.reader_jar = jar;
        self
    }
}
