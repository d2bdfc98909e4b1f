//! Scanner integration tests against a tree of real git repositories.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

use herald::scan::{walk_repos, BranchState};

fn git(args: &[&str], dir: &Path) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {args:?} failed in {}", dir.display());
}

/// Create a git repository at `path` with one commit on `main`.
fn init_repo(path: &Path) {
    fs::create_dir_all(path).expect("failed to create repo dir");

    git(&["init"], path);
    git(&["config", "user.email", "test@test.com"], path);
    git(&["config", "user.name", "Test"], path);

    fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(&["add", "README.md"], path);
    git(&["commit", "-m", "Initial commit"], path);
    git(&["branch", "-M", "main"], path);
}

#[test]
fn reports_only_dirty_or_off_baseline_repos() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    let clean = root.join("clean_main");
    init_repo(&clean);

    let dirty = root.join("dirty_feature");
    init_repo(&dirty);
    git(&["checkout", "-b", "feature/x"], &dirty);
    fs::write(dirty.join("README.md"), "# Changed\n").unwrap();

    let repos = walk_repos(root).unwrap();
    assert_eq!(repos.len(), 2);

    let reportable: Vec<_> = repos.iter().filter(|r| r.is_reportable()).collect();
    assert_eq!(reportable.len(), 1);

    let status = reportable[0];
    assert_eq!(status.rel_path, "dirty_feature");
    assert_eq!(status.branch, BranchState::Named("feature/x".to_string()));
    assert!(status.diff.as_deref().unwrap().contains("1 file changed"));
}

#[test]
fn does_not_descend_into_detected_repositories() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    let outer = root.join("outer");
    init_repo(&outer);

    // A nested repository (e.g. a submodule checkout) must not be
    // recorded separately.
    let inner = outer.join("vendor/inner");
    init_repo(&inner);

    let repos = walk_repos(root).unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].rel_path, "outer");
}

#[test]
fn finds_repositories_below_plain_directories() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    let nested = root.join("group/team/project");
    init_repo(&nested);

    let repos = walk_repos(root).unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].rel_path, "group/team/project");
}

#[test]
fn root_repository_reports_its_basename() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("myproject");
    init_repo(&root);
    git(&["checkout", "-b", "feature/y"], &root);

    let repos = walk_repos(&root).unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].rel_path, "myproject");
    assert!(repos[0].is_reportable());
}

#[test]
fn detached_head_reports_short_hash_marker() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    let repo = root.join("detached");
    init_repo(&repo);
    git(&["checkout", "--detach"], &repo);

    let repos = walk_repos(root).unwrap();
    assert_eq!(repos.len(), 1);

    let display = repos[0].branch.display();
    assert!(
        display.starts_with("DETACHED@") && display.len() > "DETACHED@".len(),
        "unexpected display: {display}"
    );
    assert!(repos[0].is_reportable());
}

#[test]
fn untracked_files_do_not_make_a_baseline_repo_reportable() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    let repo = root.join("untracked_only");
    init_repo(&repo);
    fs::write(repo.join("scratch.txt"), "notes").unwrap();

    let repos = walk_repos(root).unwrap();
    assert_eq!(repos.len(), 1);
    assert!(!repos[0].is_reportable());
}

#[test]
fn empty_tree_yields_no_repositories() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("a/b")).unwrap();

    let repos = walk_repos(tmp.path()).unwrap();
    assert!(repos.is_empty());
}
