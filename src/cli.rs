use clap::{Parser, Subcommand};

use crate::adapters::outbound::formatters::{JsonForestFormatter, TextForestFormatter};
use crate::ports::outbound::ForestFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "tree" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'text'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ForestFormatter> {
        match self {
            OutputFormat::Json => Box::new(JsonForestFormatter::new()),
            OutputFormat::Text => Box::new(TextForestFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Json => "📝 Rendering JSON module forest...",
            OutputFormat::Text => "📝 Rendering module tree...",
        }
    }
}

/// Scan Maven workspaces and attribute declared dependencies
#[derive(Parser, Debug)]
#[command(name = "pomscope")]
#[command(version)]
#[command(about = "Scan Maven workspaces and attribute declared dependencies", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan workspace roots and reconstruct the module forest
    Scan {
        /// Workspace root directories (defaults to the current directory)
        roots: Vec<String>,

        /// Output format: json or text
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Exclude directories matching patterns (supports wildcards: *)
        /// Can be specified multiple times: -e "target" -e "build-*"
        #[arg(short, long = "exclude", value_name = "PATTERN")]
        exclude: Vec<String>,

        /// Configuration file path (default: pomscope.config.yml in the first root)
        #[arg(short, long)]
        config: Option<String>,

        /// Maven executable override
        #[arg(long, value_name = "PATH")]
        mvn: Option<String>,

        /// GAV reader plugin jar to install before scanning
        #[arg(long, value_name = "JAR")]
        reader_jar: Option<String>,

        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    },
    /// Locate a dependency declaration inside one descriptor
    Locate {
        /// Dependency coordinate: groupId:artifactId[:version]
        gav: String,

        /// Descriptor file to search
        #[arg(long, value_name = "FILE")]
        pom: String,

        /// Output format: json or text
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
