/// Formatter adapters for the scan output formats
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonForestFormatter;
pub use text_formatter::TextForestFormatter;
