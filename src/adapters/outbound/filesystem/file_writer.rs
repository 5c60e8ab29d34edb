use crate::ports::outbound::OutputPresenter;
use crate::shared::error::PomscopeError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// FileSystemWriter adapter for writing output to a file
///
/// Refuses to write through a symbolic link and requires the parent
/// directory to exist already.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        PomscopeError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(
                    self.write_error(format!("parent directory does not exist: {}", parent.display()))
                );
            }
        }

        if self.output_path.exists() {
            let metadata = fs::symlink_metadata(&self.output_path)
                .map_err(|e| self.write_error(e.to_string()))?;
            if metadata.is_symlink() {
                return Err(self.write_error(
                    "output path is a symbolic link; writing through symbolic links is not allowed",
                ));
            }
        }

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
