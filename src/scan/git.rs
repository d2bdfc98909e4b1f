//! Git queries for the repository scanner.
//!
//! Thin wrappers over the git CLI with the scanner's failure policy:
//! a missing git binary is fatal to the caller, but any per-repository
//! command failure is "no information" rather than an error.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Branch name treated as the baseline and suppressed from reports.
pub const DEFAULT_BRANCH: &str = "main";

/// Check that a git executable is on the search path.
pub fn check_git_available() -> Result<()> {
    which::which("git")
        .map(|_| ())
        .context("git not found on PATH")
}

/// Run a git command in `dir`, returning trimmed stdout on success.
///
/// Returns `None` when the command exits non-zero or cannot be
/// spawned; stderr is discarded. Scanner queries treat both cases as
/// "no information".
fn run_git(args: &[&str], dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(out) if out.status.success() => {
            Some(String::from_utf8_lossy(&out.stdout).trim().to_string())
        }
        Ok(out) => {
            debug!(
                "git {} in {} exited with {}",
                args.join(" "),
                dir.display(),
                out.status
            );
            None
        }
        Err(e) => {
            debug!("failed to spawn git {}: {e}", args.join(" "));
            None
        }
    }
}

/// Current branch of a repository, as reported in scan output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchState {
    /// A named branch.
    Named(String),
    /// Detached HEAD, carrying the short commit hash.
    Detached(String),
    /// The branch query failed.
    Unknown,
}

impl BranchState {
    /// Whether this is the baseline branch that scan output suppresses.
    pub fn is_baseline(&self) -> bool {
        matches!(self, BranchState::Named(name) if name == DEFAULT_BRANCH)
    }

    /// Display form: the branch name, or `DETACHED@<sha>`.
    pub fn display(&self) -> String {
        match self {
            BranchState::Named(name) => name.clone(),
            BranchState::Detached(sha) => format!("DETACHED@{sha}"),
            BranchState::Unknown => "UNKNOWN".to_string(),
        }
    }
}

/// Resolve the current branch via `rev-parse --abbrev-ref HEAD`.
///
/// The literal `HEAD` means a detached head; the short commit hash is
/// substituted (`?` when even that fails).
pub fn current_branch(dir: &Path) -> BranchState {
    let Some(name) = run_git(&["rev-parse", "--abbrev-ref", "HEAD"], dir) else {
        return BranchState::Unknown;
    };

    if name == "HEAD" {
        let sha = run_git(&["rev-parse", "--short", "HEAD"], dir)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "?".to_string());
        return BranchState::Detached(sha);
    }

    BranchState::Named(name)
}

/// One-line shortstat of staged + unstaged changes vs HEAD.
///
/// Empty output means a clean tree; a failed query also reads as
/// clean.
pub fn diff_shortstat(dir: &Path) -> Option<String> {
    run_git(&["diff", "--shortstat", "HEAD"], dir).filter(|s| !s.is_empty())
}

/// Whether `dir` is itself a git working directory.
///
/// Fast path: a `.git` entry (a directory for normal clones, a file
/// for worktrees). Fallback: ask git directly, which covers unusual
/// layouts.
pub fn is_git_repo(dir: &Path) -> bool {
    if dir.join(".git").exists() {
        return true;
    }

    run_git(&["rev-parse", "--is-inside-work-tree"], dir)
        .map(|out| out == "true")
        .unwrap_or(false)
}
