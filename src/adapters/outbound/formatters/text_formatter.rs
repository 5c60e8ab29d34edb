use crate::application::dto::AttributedModule;
use crate::ports::outbound::ForestFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextForestFormatter adapter - indented module tree for terminals
///
/// Renders the forest with the familiar `+-`/`\-` report glyphs, one module
/// per line followed by the dependencies it declares itself.
pub struct TextForestFormatter;

impl TextForestFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_module(out: &mut String, module: &AttributedModule, prefix: &str, glyph: &str) {
        let dir = module.descriptor_dir.display();
        let _ = writeln!(out, "{}{}{} ({})", prefix, glyph, module.identity, dir);

        let child_prefix = match glyph {
            "" => String::new(),
            "\\- " => format!("{}   ", prefix),
            _ => format!("{}|  ", prefix),
        };

        for dependency in &module.declared_dependencies {
            let _ = writeln!(out, "{}   * {}", child_prefix, dependency);
        }

        let count = module.children.len();
        for (idx, child) in module.children.iter().enumerate() {
            let child_glyph = if idx + 1 == count { "\\- " } else { "+- " };
            Self::render_module(out, child, &child_prefix, child_glyph);
        }
    }
}

impl Default for TextForestFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ForestFormatter for TextForestFormatter {
    fn format(&self, modules: &[AttributedModule]) -> Result<String> {
        let mut out = String::new();
        for module in modules {
            Self::render_module(&mut out, module, "", "");
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module_graph::domain::MavenCoordinate;
    use std::path::PathBuf;

    fn module(gav: &str, dir: &str, deps: &[&str], children: Vec<AttributedModule>) -> AttributedModule {
        AttributedModule::new(
            MavenCoordinate::from_gav(gav),
            PathBuf::from(dir),
            deps.iter().map(|d| MavenCoordinate::from_gav(d)).collect(),
            children,
        )
    }

    #[test]
    fn test_single_module_with_dependency() {
        let formatter = TextForestFormatter::new();
        let output = formatter
            .format(&[module("g:app:1", "/ws/app", &["com.foo:bar:2.0"], vec![])])
            .unwrap();

        assert_eq!(output, "g:app:1 (/ws/app)\n   * com.foo:bar:2.0\n");
    }

    #[test]
    fn test_nested_tree_glyphs() {
        let leaf_a = module("g:a:1", "/ws/a", &[], vec![]);
        let leaf_b = module("g:b:1", "/ws/b", &[], vec![]);
        let root = module("g:parent:1", "/ws", &[], vec![leaf_a, leaf_b]);

        let formatter = TextForestFormatter::new();
        let output = formatter.format(&[root]).unwrap();

        assert_eq!(
            output,
            "g:parent:1 (/ws)\n+- g:a:1 (/ws/a)\n\\- g:b:1 (/ws/b)\n"
        );
    }

    #[test]
    fn test_deep_nesting_indents_under_last_child() {
        let grandchild = module("g:deep:1", "/ws/b/deep", &[], vec![]);
        let leaf_b = module("g:b:1", "/ws/b", &[], vec![grandchild]);
        let root = module("g:parent:1", "/ws", &[], vec![leaf_b]);

        let formatter = TextForestFormatter::new();
        let output = formatter.format(&[root]).unwrap();

        assert_eq!(
            output,
            "g:parent:1 (/ws)\n\\- g:b:1 (/ws/b)\n   \\- g:deep:1 (/ws/b/deep)\n"
        );
    }

    #[test]
    fn test_empty_forest_is_empty_string() {
        let formatter = TextForestFormatter::new();
        assert_eq!(formatter.format(&[]).unwrap(), "");
    }
}
