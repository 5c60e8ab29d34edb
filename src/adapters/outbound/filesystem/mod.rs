/// Filesystem adapters for descriptor discovery and file I/O
mod descriptor_walker;
mod file_reader;
mod file_writer;

pub use descriptor_walker::FileSystemDescriptorFinder;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
