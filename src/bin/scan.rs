//! Repository status scanner CLI.

use clap::Parser;
use herald::scan;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "herald-scan")]
#[command(
    about = "Report repositories off the default branch or with uncommitted changes",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    herald::logging::init();
    let cli = Cli::parse();

    if !cli.root.is_dir() {
        eprintln!("Not a directory: {}", cli.root.display());
        return ExitCode::from(2);
    }

    if scan::check_git_available().is_err() {
        eprintln!("git not found on PATH");
        return ExitCode::from(1);
    }

    match scan::walk_repos(&cli.root) {
        Ok(repos) => {
            for repo in repos.iter().filter(|r| r.is_reportable()) {
                scan::print_report(repo);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Scan failed: {e:#}");
            ExitCode::from(2)
        }
    }
}
