use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pegomock-remove",
    version,
    about = "Removes pegomock-generated mocks and matchers"
)]
pub struct Cli {
    /// Directory to clean (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Walk the whole tree below the path, not just the directory itself
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Delete without asking for confirmation
    #[arg(short = 'n', long = "non-interactive")]
    pub non_interactive: bool,

    /// Print the files that would be deleted, but don't delete them
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Don't list the files being deleted in non-interactive mode
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Config file (defaults to .pegomock-remove.toml in the target directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
