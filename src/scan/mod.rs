//! Repository status scanner.
//!
//! Walks a directory tree, records every git working directory without
//! descending into it (nested submodules are never reported
//! separately), and reports repositories that are off the baseline
//! branch or carry uncommitted changes. Clean repositories on the
//! baseline stay silent.

pub mod git;

pub use git::{check_git_available, BranchState, DEFAULT_BRANCH};

use anyhow::{Context, Result};
use colored::Colorize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Scan result for one detected repository.
#[derive(Debug, Clone)]
pub struct RepoStatus {
    /// Path relative to the scan root; the root itself reports its
    /// basename.
    pub rel_path: String,
    /// Current branch state.
    pub branch: BranchState,
    /// One-line shortstat, present only when the tree is dirty.
    pub diff: Option<String>,
}

impl RepoStatus {
    /// Whether this repository appears in scan output.
    pub fn is_reportable(&self) -> bool {
        !self.branch.is_baseline() || self.diff.is_some()
    }
}

/// Walk `root` and collect the status of every repository found.
///
/// Detected repositories are not descended into, directories named
/// `.git` are never entered, and unreadable directories are skipped.
/// Children are visited in sorted order so output is stable.
pub fn walk_repos(root: &Path) -> Result<Vec<RepoStatus>> {
    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve scan root {}", root.display()))?;

    let mut repos = Vec::new();
    walk_dir(&root, &root, &mut repos);
    Ok(repos)
}

fn walk_dir(dir: &Path, root: &Path, repos: &mut Vec<RepoStatus>) {
    if git::is_git_repo(dir) {
        repos.push(status_of(dir, root));
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("skipping unreadable directory {}: {e}", dir.display());
            return;
        }
    };

    let mut subdirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| path.file_name() != Some(OsStr::new(".git")))
        .collect();
    subdirs.sort();

    for sub in subdirs {
        walk_dir(&sub, root, repos);
    }
}

fn status_of(dir: &Path, root: &Path) -> RepoStatus {
    let rel_path = match dir.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string()),
    };

    RepoStatus {
        rel_path,
        branch: git::current_branch(dir),
        diff: git::diff_shortstat(dir),
    }
}

/// Print the report block for a single repository.
///
/// The branch line appears only off baseline and the diff line only
/// when the tree is dirty; a blank line separates blocks.
pub fn print_report(status: &RepoStatus) {
    println!("{}", status.rel_path.cyan().bold());

    if !status.branch.is_baseline() {
        let branch = status.branch.display();
        let branch = match status.branch {
            BranchState::Detached(_) => branch.magenta(),
            _ => branch.yellow(),
        };
        println!("  branch: {branch}");
    }

    if let Some(diff) = &status.diff {
        println!("  diff:   {}", diff.red());
    }

    println!();
}
