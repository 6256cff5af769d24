use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use mmpgen::AppError;

#[derive(Parser)]
#[command(name = "mmpgen")]
#[command(version)]
#[command(
    about = "Generate EPOC S60 build-project files for ScummVM application variants",
    long_about = None
)]
struct Cli {
    /// Destination directory for the generated files
    dest: PathBuf,
    /// Application UIDs, one per variant, in build order
    #[arg(required_unless_present = "uid_file")]
    uids: Vec<String>,
    /// Read UIDs from a file instead (one per line, '#' starts a comment)
    #[arg(short = 'f', long, conflicts_with = "uids")]
    uid_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let uids = match &cli.uid_file {
        Some(path) => read_uid_file(path)?,
        None => cli.uids,
    };

    mmpgen::generate(&uids, &cli.dest)?;
    println!("✅ Generated project files for {} variant(s) in {}", uids.len(), cli.dest.display());
    Ok(())
}

/// Parse a UID list file: one token per line, blank lines and `#` comments
/// ignored.
fn read_uid_file(path: &Path) -> Result<Vec<String>, AppError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter_map(|line| {
            let token = line.split('#').next().unwrap_or(line).trim();
            (!token.is_empty()).then(|| token.to_string())
        })
        .collect())
}
