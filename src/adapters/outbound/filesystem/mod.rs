/// Filesystem adapters for sheet exports and output files
mod directory_source;
mod file_writer;

pub use directory_source::DirectorySheetSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
