use crate::module_graph::domain::{MavenCoordinate, ModuleForest, NodeId, PositionSpan};
use crate::ports::outbound::DescriptorReader;
use regex::Regex;
use std::collections::HashSet;

const DEPENDENCIES_TAG: &str = "<dependencies>";
const DESCRIPTOR_FILENAME: &str = "pom.xml";

/// PositionFinder service - maps a dependency identity back to the
/// line/column span of its declaration inside descriptor text.
///
/// Declaration blocks are matched with a case-insensitive multi-line regex.
/// A pragmatic approximation of structured parsing: nested or commented-out
/// blocks can be misattributed, which is acceptable for annotation purposes.
pub struct PositionFinder {
    block_pattern: Regex,
}

impl PositionFinder {
    pub fn new() -> Self {
        Self {
            block_pattern: Regex::new(r"(?is)<dependency>.*?</dependency>")
                .expect("dependency block pattern"),
        }
    }

    /// Position of the literal `<dependencies>` opening tag, if present.
    pub fn dependencies_section(&self, text: &str) -> Option<PositionSpan> {
        let offset = text.find(DEPENDENCIES_TAG)?;
        let (line, column) = line_column_at(text, offset);
        Some(PositionSpan::on_line(
            line,
            column,
            column + DEPENDENCIES_TAG.len(),
        ))
    }

    /// Spans of the groupId/artifactId/version fields of the first
    /// declaration block matching the target, within a single document.
    pub fn dependency_positions(
        &self,
        text: &str,
        target: &MavenCoordinate,
    ) -> Vec<PositionSpan> {
        let group = target.group_id().to_lowercase();
        let artifact = target.artifact_id().to_lowercase();
        let version = target.version().to_lowercase();

        let Some(block) = self.block_pattern.find_iter(text).find(|candidate| {
            let lowered = candidate.as_str().to_lowercase();
            lowered.contains(&group) && lowered.contains(&artifact)
        }) else {
            return Vec::new();
        };

        let group_element = format!("<groupid>{}</groupid>", group);
        let artifact_element = format!("<artifactid>{}</artifactid>", artifact);
        let version_element = format!("<version>{}</version>", version);

        let (first_line, _) = line_column_at(text, block.start());
        let mut spans = Vec::new();
        for (offset, line) in block.as_str().lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let lowered = line.trim().to_lowercase();
            if lowered == group_element
                || lowered == artifact_element
                || lowered == version_element
            {
                let column = line.find('<').unwrap_or(0);
                spans.push(PositionSpan::on_line(
                    first_line + offset,
                    column,
                    line.chars().count(),
                ));
            }
        }
        spans
    }

    /// Like [`dependency_positions`](Self::dependency_positions), but when
    /// the node's own descriptor has no matching block the lookup walks the
    /// ancestor chain: a dependency visible in a child's report may only be
    /// textually declared in an ancestor descriptor.
    pub fn dependency_positions_in_forest<R: DescriptorReader>(
        &self,
        forest: &ModuleForest,
        node: NodeId,
        target: &MavenCoordinate,
        reader: &R,
    ) -> Vec<PositionSpan> {
        let mut visited = HashSet::new();
        let mut current = Some(node);

        while let Some(id) = current {
            if !visited.insert(id) {
                break;
            }
            let Some(module) = forest.node(id) else {
                break;
            };
            if !module.is_placeholder() {
                let path = module.descriptor_dir().join(DESCRIPTOR_FILENAME);
                match reader.read_descriptor(&path) {
                    Ok(text) => {
                        let spans = self.dependency_positions(&text, target);
                        if !spans.is_empty() {
                            return spans;
                        }
                    }
                    Err(e) => {
                        tracing::debug!("could not read {}: {e:#}", path.display());
                    }
                }
            }
            current = forest.parent_of(id);
        }

        Vec::new()
    }
}

impl Default for PositionFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-based (line, column) of a byte offset.
fn line_column_at(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = text[line_start..offset].chars().count();
    (line, column)
}
