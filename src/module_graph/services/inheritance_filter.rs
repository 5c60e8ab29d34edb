use regex::Regex;

/// InheritanceFilter service - declared-here versus inherited dependencies
///
/// The transitive report re-prints every inherited dependency inside each
/// child module's own subtree. This filter removes from a module's raw
/// listing every line that also closes out a line of its parent's listing,
/// recovering what the module itself declares. Best-effort de-duplication:
/// the match is textual, not version-aware.
pub struct InheritanceFilter;

impl InheritanceFilter {
    /// Returns `None` when there is no parent context at all (a root module
    /// has nothing to filter against).
    pub fn filter_inherited(
        child_lines: &[String],
        parent_lines: Option<&[String]>,
    ) -> Option<Vec<String>> {
        let parent_lines = parent_lines?;
        let parent_text = parent_lines.join("\n");

        Some(
            child_lines
                .iter()
                .filter(|line| !Self::is_inherited(line, &parent_text))
                .cloned()
                .collect(),
        )
    }

    fn is_inherited(line: &str, parent_text: &str) -> bool {
        let Some(start) = line.find(|c: char| c.is_alphanumeric()) else {
            return false;
        };
        let suffix = line[start..].trim_end();
        if suffix.is_empty() {
            return false;
        }
        // whole-line match: the glyph-stripped suffix must end a line of the
        // parent's joined report text
        match Regex::new(&format!("(?m)^.*{}$", regex::escape(suffix))) {
            Ok(pattern) => pattern.is_match(parent_text),
            Err(_) => false,
        }
    }
}
