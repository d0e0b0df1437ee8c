pub mod backup;
pub mod config;
pub mod file_finder;
pub mod processor;
pub mod stripper;

use std::path::PathBuf;

pub use backup::BackupDir;
pub use config::Config;
pub use file_finder::{CandidateFile, FileIter, classify, find_files};
pub use processor::{
    ContentWriter, FileError, FileOutcome, FileStatus, FsWriter, Processor, RunSummary,
    StripFn,
};
pub use stripper::{Category, StripError, strip_comments};

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Root directory not found or not a directory: {}", .path.display())]
    InvalidRoot { path: PathBuf },
}
