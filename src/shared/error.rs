use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems and editor integrations to distinguish
/// between different kinds of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the scan (or lookup) completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (Maven unavailable, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for workspace scanning.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum PomscopeError {
    #[error("Maven executable is not available: {command}\nDetails: {details}\n\n💡 Hint: Install Maven and make sure `mvn` is on your PATH, or point pomscope at it with --mvn <PATH>")]
    MavenUnavailable { command: String, details: String },

    #[error("Failed to read descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the pom.xml exists and you have read permissions")]
    DescriptorReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid workspace path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid directory containing a Maven project")]
    InvalidWorkspacePath { path: PathBuf, reason: String },

    #[error("Invalid coordinate: {input}\nReason: {reason}\n\n💡 Hint: Coordinates take the form groupId:artifactId:version, e.g. org.slf4j:slf4j-api:2.0.9")]
    InvalidCoordinate { input: String, reason: String },
}
