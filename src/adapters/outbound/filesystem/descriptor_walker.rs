use crate::ports::outbound::DescriptorFinder;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

const DESCRIPTOR_FILENAME: &str = "pom.xml";

/// FileSystemDescriptorFinder adapter - recursive pom.xml discovery
///
/// Walks a workspace root with an explicit directory stack, skipping
/// symbolic links and any directory whose name matches an exclusion pattern.
/// Unreadable directories are skipped, not fatal: a workspace routinely
/// contains build output the scanning user cannot enter.
pub struct FileSystemDescriptorFinder;

impl FileSystemDescriptorFinder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemDescriptorFinder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DescriptorFinder for FileSystemDescriptorFinder {
    async fn find_descriptors(
        &self,
        root: &Path,
        exclude_patterns: &[String],
    ) -> Result<Vec<PathBuf>> {
        let root = root.to_path_buf();
        let patterns = exclude_patterns.to_vec();
        tokio::task::spawn_blocking(move || walk(&root, &patterns))
            .await
            .context("descriptor search task failed")?
    }
}

fn walk(root: &Path, exclude_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    if !root.is_dir() {
        return Ok(found);
    }

    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("skipping unreadable directory {}: {}", dir.display(), e);
                continue;
            }
        };
        for entry in entries {
            let Ok(entry) = entry else { continue };
            let Ok(file_type) = entry.file_type() else { continue };
            if file_type.is_symlink() {
                continue;
            }
            let path = entry.path();
            if file_type.is_dir() {
                if !is_excluded(&entry.file_name().to_string_lossy(), exclude_patterns) {
                    pending.push(path);
                }
            } else if file_type.is_file() && entry.file_name() == DESCRIPTOR_FILENAME {
                found.push(path);
            }
        }
    }

    Ok(found)
}

fn is_excluded(dir_name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| wildcard_match(p, dir_name))
}

/// Matches a name against a pattern where `*` stands for any run of
/// characters. Patterns without a wildcard must match exactly.
fn wildcard_match(pattern: &str, name: &str) -> bool {
    if !pattern.contains('*') {
        return pattern == name;
    }

    let parts: Vec<&str> = pattern.split('*').collect();
    let mut position = 0;
    for (idx, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if idx == 0 {
            if !name.starts_with(part) {
                return false;
            }
            position = part.len();
        } else if idx == parts.len() - 1 {
            let rest = &name[position..];
            return rest.len() >= part.len() && rest.ends_with(part);
        } else {
            match name[position..].find(part) {
                Some(found) => position += found + part.len(),
                None => return false,
            }
        }
    }
    true
}
