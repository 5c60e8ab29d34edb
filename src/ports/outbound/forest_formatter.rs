use crate::application::dto::AttributedModule;
use crate::shared::Result;

/// ForestFormatter port for rendering the attributed module forest
///
/// This port abstracts the output format (JSON, indented text tree, etc.).
pub trait ForestFormatter {
    /// Formats the attributed module forest.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, modules: &[AttributedModule]) -> Result<String>;
}
