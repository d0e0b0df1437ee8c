use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "decomment",
    version = "0.1.0",
    about = "Strip comments from source files, backing up every file it rewrites",
    long_about = "Walks a directory tree and removes comments from .js/.jsx/.ts/.tsx/.json, .py, .sql, .html/.css/.scss files.\n\
                  Each rewritten file is first copied into backup_<YYYYmmdd_HHMMSS>/ under the root.\n\
                  node_modules, .git, .bolt and dist are never entered.\n\n\
                  Comments are found with regular expressions, not a parser: a comment marker inside a\n\
                  string literal (for example \"https://...\") is stripped along with the rest of its line.",
    propagate_version = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(help = "Directory to process", default_value = ".")]
    pub path: PathBuf,
}
