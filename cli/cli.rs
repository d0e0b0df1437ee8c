use decomment_core::{BackupDir, Config, Processor, find_files};
mod args;
mod logging;
mod report;

use anyhow::Result;
use args::{CliArgs, Command};
use chrono::Local;
use clap::{CommandFactory, Parser};
use console::style;
use std::io;
use std::process::ExitCode;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn main() -> Result<ExitCode> {
    let cli: CliArgs = CliArgs::parse();

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            Command::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    logging::init_logging()?;

    let started = Local::now();
    let root = cli.path;
    let backups = BackupDir::for_run(&root, started);
    let config = Config::default();
    tracing::debug!(
        backup_dir = %backups.path().display(),
        skip_dirs = ?config.skip_dirs().collect::<Vec<_>>(),
        extensions = ?config.allowed_extensions().collect::<Vec<_>>(),
        "run configured"
    );

    println!("Starting comment removal from: {}", style(root.display()).cyan());

    let files = match find_files(&root, &config) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{}", style(format!("Error finding files: {}", e)).red());
            return Ok(ExitCode::FAILURE);
        }
    };

    let processor = Processor::new(backups);
    let summary = processor.process_all(files, report::print_outcome);
    report::print_summary(&summary);

    Ok(ExitCode::SUCCESS)
}
