use pomscope::adapters::outbound::console::StderrProgressReporter;
use pomscope::adapters::outbound::filesystem::{
    FileSystemDescriptorFinder, FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use pomscope::adapters::outbound::process::SubprocessMavenRunner;
use pomscope::application::dto::ScanRequest;
use pomscope::application::use_cases::ScanWorkspaceUseCase;
use pomscope::cli::{Args, Command, OutputFormat};
use pomscope::config::{self, ConfigFile};
use pomscope::module_graph::domain::{MavenCoordinate, PositionSpan};
use pomscope::module_graph::services::PositionFinder;
use pomscope::ports::outbound::{DescriptorReader, OutputPresenter};
use pomscope::shared::error::{ExitCode, PomscopeError};
use pomscope::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    let args = Args::parse_args();

    match args.command {
        Command::Scan {
            roots,
            format,
            output,
            exclude,
            config: config_path,
            mvn,
            reader_jar,
            verbose,
        } => {
            init_tracing(verbose);

            let roots = if roots.is_empty() {
                vec![".".to_string()]
            } else {
                roots
            };
            let root_paths: Vec<PathBuf> = roots.iter().map(PathBuf::from).collect();
            for root in &root_paths {
                validate_workspace_path(root)?;
            }

            let file_config = match config_path {
                Some(path) => config::load_config_from_path(Path::new(&path))?,
                None => config::discover_config(&root_paths[0])?.unwrap_or_default(),
            };

            // Command-line arguments win over the config file
            let format = resolve_format(format, &file_config)?;
            let mut exclude_patterns = exclude;
            if let Some(config_exclude) = &file_config.exclude {
                for pattern in config_exclude {
                    if !exclude_patterns.contains(pattern) {
                        exclude_patterns.push(pattern.clone());
                    }
                }
            }
            let mvn_path = mvn
                .or_else(|| file_config.mvn_path.clone())
                .unwrap_or_else(|| "mvn".to_string());
            let reader_jar = reader_jar
                .or_else(|| file_config.reader_jar.clone())
                .map(PathBuf::from);

            let mut maven_runner = SubprocessMavenRunner::new(mvn_path);
            if let Some(secs) = file_config.timeout_secs {
                maven_runner = maven_runner.with_timeout(Some(Duration::from_secs(secs)));
            }

            let use_case = ScanWorkspaceUseCase::new(
                FileSystemDescriptorFinder::new(),
                maven_runner,
                StderrProgressReporter::new(),
            );

            let mut request =
                ScanRequest::new(root_paths, exclude_patterns).with_reader_jar(reader_jar);
            if let Some(plugin) = file_config.reader_plugin.clone() {
                request = request.with_reader_plugin(plugin);
            }

            let response = use_case.execute(request).await?;

            eprintln!("{}", format.progress_message());
            let formatter = format.create_formatter();
            let rendered = formatter.format(&response.modules)?;

            let presenter: Box<dyn OutputPresenter> = match output {
                Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
                None => Box::new(StdoutPresenter::new()),
            };
            presenter.present(&rendered)?;

            Ok(())
        }
        Command::Locate {
            gav,
            pom,
            format,
            verbose,
        } => {
            init_tracing(verbose);

            let target = MavenCoordinate::parse_gav(&gav)?;
            let reader = FileSystemReader::new();
            let text = reader.read_descriptor(Path::new(&pom))?;

            let finder = PositionFinder::new();
            let spans = finder.dependency_positions(&text, &target);

            let rendered = match format {
                OutputFormat::Json => {
                    let mut json = serde_json::to_string_pretty(&spans)?;
                    json.push('\n');
                    json
                }
                OutputFormat::Text => render_spans_text(&spans),
            };

            StdoutPresenter::new().present(&rendered)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "pomscope=debug" } else { "pomscope=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_format(cli_format: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    match cli_format {
        Some(format) => Ok(format),
        None => match &config.format {
            Some(raw) => raw
                .parse::<OutputFormat>()
                .map_err(|e| anyhow::anyhow!("Invalid format in config file: {}", e)),
            None => Ok(OutputFormat::Json),
        },
    }
}

fn render_spans_text(spans: &[PositionSpan]) -> String {
    if spans.is_empty() {
        return "no declaration found\n".to_string();
    }
    spans
        .iter()
        .map(|span| {
            format!(
                "line {}, columns {}-{}\n",
                span.start.line + 1,
                span.start.column + 1,
                span.end.column + 1
            )
        })
        .collect()
}

fn validate_workspace_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PomscopeError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = std::fs::symlink_metadata(path).map_err(|e| {
        PomscopeError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        }
    })?;

    if metadata.is_symlink() {
        return Err(PomscopeError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: "Workspace path is a symbolic link; symbolic links are not allowed".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(PomscopeError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
