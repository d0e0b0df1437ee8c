use chrono::{DateTime, Local};
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const DIR_PREFIX: &str = "backup_";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Flat backup directory shared by every file rewritten in one run.
///
/// The name is fixed from the run's start time; the directory itself is only
/// created when the first backup is taken.
#[derive(Debug, Clone)]
pub struct BackupDir {
    dir: PathBuf,
}

impl BackupDir {
    pub fn for_run(base: &Path, started: DateTime<Local>) -> Self {
        BackupDir {
            dir: base.join(dir_name(started)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Copies `original` into the directory under its own file name and
    /// returns the copy's path. An earlier backup with the same name is
    /// overwritten.
    pub fn back_up(&self, original: &Path) -> io::Result<PathBuf> {
        let file_name = original.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no file name", original.display()),
            )
        })?;
        fs::create_dir_all(&self.dir)?;
        let backup = self.dir.join(file_name);
        copy_preserving_metadata(original, &backup)?;
        Ok(backup)
    }

    /// Puts a backup copy back over `original`.
    pub fn restore(&self, backup: &Path, original: &Path) -> io::Result<()> {
        copy_preserving_metadata(backup, original)
    }
}

pub fn dir_name(started: DateTime<Local>) -> String {
    format!("{}{}", DIR_PREFIX, started.format(STAMP_FORMAT))
}

/// True for any `backup_YYYYmmdd_HHMMSS` name, whichever run created it.
pub fn is_backup_dir_name(name: &str) -> bool {
    let Some(stamp) = name.strip_prefix(DIR_PREFIX) else {
        return false;
    };
    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 8 { *b == b'_' } else { b.is_ascii_digit() })
}

/// Copies content and permissions, then carries over access and
/// modification times.
fn copy_preserving_metadata(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    let meta = fs::metadata(from)?;
    filetime::set_file_times(
        to,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )
}
