use console::style;
use decomment_core::{CandidateFile, FileError, FileOutcome, FileStatus, RunSummary};

pub fn print_outcome(file: &CandidateFile, outcome: &FileOutcome) {
    match outcome {
        Ok(FileStatus::Rewritten { backup }) => println!(
            "{} {} (Backup: {})",
            style("Processed:").green(),
            file.path.display(),
            style(backup.display()).dim()
        ),
        Ok(FileStatus::SkippedBinary) => println!(
            "{} {}",
            style("Skipping binary file:").yellow(),
            style(file.path.display()).dim()
        ),
        Ok(FileStatus::Unchanged | FileStatus::WouldEmpty) => {}
        Err(err) => print_error(err),
    }
}

fn print_error(err: &FileError) {
    eprintln!("  {} {}", style("⚠️").yellow(), style(err).red());
    if let FileError::Write {
        backup,
        restore_error,
        ..
    } = err
    {
        match restore_error {
            None => eprintln!("    Restored from backup: {}", style(backup.display()).dim()),
            Some(e) => eprintln!(
                "    {} {} could not be restored from {}: {}",
                style("✗").red(),
                err.path().display(),
                backup.display(),
                style(e).red()
            ),
        }
    }
}

pub fn print_summary(summary: &RunSummary) {
    println!("\nComment removal completed!");
    println!(
        "Result: {} rewritten, {} unchanged, {} left as is (would be empty), {} binary, {} failed, out of {} {}.",
        style(summary.rewritten).green(),
        summary.unchanged,
        summary.would_empty,
        summary.binary,
        style(summary.failed).red(),
        summary.total(),
        if summary.total() == 1 { "file" } else { "files" }
    );
}
