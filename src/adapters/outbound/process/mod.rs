/// Process adapters for invoking the Maven build tool
mod maven_command;
mod maven_runner;

pub use maven_command::MavenCommand;
pub use maven_runner::SubprocessMavenRunner;
