use crate::application::dto::AttributedModule;
use crate::ports::outbound::ForestFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonForestFormatter adapter - pretty-printed JSON forest output
pub struct JsonForestFormatter;

impl JsonForestFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonForestFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ForestFormatter for JsonForestFormatter {
    fn format(&self, modules: &[AttributedModule]) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(modules)
            .context("Failed to serialize module forest to JSON")?;
        rendered.push('\n');
        Ok(rendered)
    }
}
