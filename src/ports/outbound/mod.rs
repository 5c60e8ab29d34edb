/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, subprocess, console, etc.).
pub mod descriptor_finder;
pub mod descriptor_reader;
pub mod forest_formatter;
pub mod maven_runner;
pub mod output_presenter;
pub mod progress_reporter;

pub use descriptor_finder::DescriptorFinder;
pub use descriptor_reader::DescriptorReader;
pub use forest_formatter::ForestFormatter;
pub use maven_runner::{MavenInvocation, MavenRunner};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
