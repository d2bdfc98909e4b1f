//! Slack notification hooks CLI.
//!
//! Invoked from developer-tooling hooks, so the exit-code contract is
//! deliberately forgiving: usage errors exit 1, but anything that goes
//! wrong after a command parses (missing configuration, network,
//! filesystem) exits 0 so the host operation is never blocked.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use herald::{notify, timing};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "herald-hooks")]
#[command(about = "Slack notification hooks for Claude Code events", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send the waiting-for-input notification
    Notification,

    /// Send the stop/subagent-stop notification
    Stop,

    /// Send a long-operation notification when a threshold is exceeded
    LongOperation {
        /// Duration in seconds
        #[arg(long)]
        duration: Option<i64>,

        /// File containing a start timestamp to calculate the duration
        #[arg(long)]
        start_file: Option<PathBuf>,

        /// Minimum duration in seconds to trigger a notification
        #[arg(long, default_value_t = timing::DEFAULT_THRESHOLD_SECS)]
        threshold: i64,

        /// Type of operation (e.g. Bash, Task)
        #[arg(long, default_value = timing::DEFAULT_OPERATION_TYPE)]
        operation_type: String,
    },

    /// Create a start-timestamp file for operation timing
    CreateStartFile {
        /// Path of the start file to create
        #[arg(long)]
        file: PathBuf,
    },

    /// Generate a shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    herald::logging::init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::from(1);
    };

    match command {
        Commands::Notification => {
            if webhook_unconfigured() {
                return ExitCode::SUCCESS;
            }
            notify::send_notification_hook();
        }
        Commands::Stop => {
            if webhook_unconfigured() {
                return ExitCode::SUCCESS;
            }
            notify::send_stop_hook();
        }
        Commands::LongOperation {
            duration,
            start_file,
            threshold,
            operation_type,
        } => {
            let source = match (duration, start_file) {
                (Some(secs), None) => timing::DurationSource::Explicit(secs),
                (None, Some(path)) => timing::DurationSource::FromFile(path),
                (Some(_), Some(_)) => {
                    eprintln!("Error: --duration and --start-file are mutually exclusive");
                    return ExitCode::from(1);
                }
                (None, None) => {
                    eprintln!("Error: Either --duration or --start-file must be specified");
                    return ExitCode::from(1);
                }
            };

            if webhook_unconfigured() {
                return ExitCode::SUCCESS;
            }
            timing::long_operation(&source, threshold, &operation_type);
        }
        Commands::CreateStartFile { file } => {
            if let Err(e) = timing::create_start_file(&file) {
                debug!("create-start-file failed: {e:#}");
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    ExitCode::SUCCESS
}

/// Webhook-sending commands no-op when the endpoint is not configured.
///
/// The check runs before any timing side effects, so an unconfigured
/// environment leaves start files untouched.
fn webhook_unconfigured() -> bool {
    match std::env::var(notify::WEBHOOK_URL_VAR) {
        Ok(value) if !value.is_empty() => false,
        _ => {
            debug!("{} not set; skipping notification", notify::WEBHOOK_URL_VAR);
            true
        }
    }
}
