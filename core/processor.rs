use crate::backup::BackupDir;
use crate::file_finder::CandidateFile;
use crate::stripper::{self, Category, StripError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where rewritten content goes. The filesystem in normal runs; tests swap in
/// writers that fail.
pub trait ContentWriter {
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsWriter;

impl ContentWriter for FsWriter {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

/// Non-error outcome for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Not valid UTF-8 text.
    SkippedBinary,
    /// Stripping changed nothing.
    Unchanged,
    /// Stripping would leave the file empty or whitespace-only; left as is.
    WouldEmpty,
    Rewritten { backup: PathBuf },
}

#[derive(thiserror::Error, Debug)]
pub enum FileError {
    #[error("Error reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error processing {}: {source}", .path.display())]
    Strip { path: PathBuf, source: StripError },

    #[error("Error backing up {}: {source}", .path.display())]
    Backup { path: PathBuf, source: io::Error },

    #[error("Error writing to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        backup: PathBuf,
        source: io::Error,
        /// `None` when the original was restored from `backup`.
        restore_error: Option<io::Error>,
    },
}

impl FileError {
    pub fn path(&self) -> &Path {
        match self {
            FileError::Read { path, .. }
            | FileError::Strip { path, .. }
            | FileError::Backup { path, .. }
            | FileError::Write { path, .. } => path,
        }
    }
}

pub type FileOutcome = Result<FileStatus, FileError>;

pub type StripFn = fn(&str, Category) -> Result<String, StripError>;

/// Strips, backs up and rewrites files one at a time.
pub struct Processor<W = FsWriter> {
    backups: BackupDir,
    writer: W,
    strip: StripFn,
}

impl Processor<FsWriter> {
    pub fn new(backups: BackupDir) -> Self {
        Processor::with_writer(backups, FsWriter)
    }
}

impl<W: ContentWriter> Processor<W> {
    pub fn with_writer(backups: BackupDir, writer: W) -> Self {
        Processor {
            backups,
            writer,
            strip: stripper::strip_comments,
        }
    }

    /// Replaces the comment stripper, which defaults to
    /// [`stripper::strip_comments`].
    pub fn with_strip_fn(mut self, strip: StripFn) -> Self {
        self.strip = strip;
        self
    }

    pub fn backups(&self) -> &BackupDir {
        &self.backups
    }

    pub fn process(&self, file: &CandidateFile) -> FileOutcome {
        let path = file.path.as_path();
        let bytes = fs::read(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let original = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => {
                debug!(path = %path.display(), "not utf-8, skipping");
                return Ok(FileStatus::SkippedBinary);
            }
        };

        let stripped = (self.strip)(&original, file.category).map_err(|source| {
            warn!(path = %path.display(), error = %source, "stripping failed, file left as is");
            FileError::Strip {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if stripped == original {
            debug!(path = %path.display(), "no comments found");
            return Ok(FileStatus::Unchanged);
        }
        if stripped.trim().is_empty() {
            debug!(path = %path.display(), "stripping would empty the file, leaving it");
            return Ok(FileStatus::WouldEmpty);
        }

        let backup = self
            .backups
            .back_up(path)
            .map_err(|source| FileError::Backup {
                path: path.to_path_buf(),
                source,
            })?;

        if let Err(source) = self.writer.write(path, &stripped) {
            warn!(path = %path.display(), error = %source, "write failed, restoring backup");
            let restore_error = self.backups.restore(&backup, path).err();
            return Err(FileError::Write {
                path: path.to_path_buf(),
                backup,
                source,
                restore_error,
            });
        }

        info!(path = %path.display(), backup = %backup.display(), "stripped comments");
        Ok(FileStatus::Rewritten { backup })
    }

    /// Processes `files` in order, handing each outcome to `report` as soon as
    /// it is known.
    pub fn process_all<I, F>(&self, files: I, mut report: F) -> RunSummary
    where
        I: IntoIterator<Item = CandidateFile>,
        F: FnMut(&CandidateFile, &FileOutcome),
    {
        let mut summary = RunSummary::default();
        for file in files {
            let outcome = self.process(&file);
            summary.record(&outcome);
            report(&file, &outcome);
        }
        summary
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rewritten: usize,
    pub unchanged: usize,
    pub would_empty: usize,
    pub binary: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            Ok(FileStatus::Rewritten { .. }) => self.rewritten += 1,
            Ok(FileStatus::Unchanged) => self.unchanged += 1,
            Ok(FileStatus::WouldEmpty) => self.would_empty += 1,
            Ok(FileStatus::SkippedBinary) => self.binary += 1,
            Err(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.rewritten + self.unchanged + self.would_empty + self.binary + self.failed
    }
}
