/// Mock implementations for testing
mod mock_descriptor_finder;
mod mock_descriptor_reader;
mod mock_maven_runner;
mod mock_progress_reporter;

pub use mock_descriptor_finder::MockDescriptorFinder;
pub use mock_descriptor_reader::MockDescriptorReader;
pub use mock_maven_runner::MockMavenRunner;
pub use mock_progress_reporter::MockProgressReporter;
