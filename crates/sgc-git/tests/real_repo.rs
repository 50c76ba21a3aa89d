//! Workflow tests against real git repositories.
//!
//! Each test builds a throwaway layout under a temp directory: a seed repo
//! with one commit on `main`, a bare clone of it acting as `origin`, and a
//! working clone of that bare repo.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pretty_assertions::assert_eq;
use sgc_git::{BranchStep, DEFAULT_REMOTE, GitRepo, Tracking};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Fixture {
    _tmp: TempDir,
    work: PathBuf,
}

impl Fixture {
    fn repo(&self) -> GitRepo {
        GitRepo::open(Some(&self.work))
    }

    fn write(&self, name: &str, content: &str) {
        fs::write(self.work.join(name), content).unwrap();
    }
}

/// Run git in `dir`, panicking with stderr on failure.
fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn configure_identity(dir: &Path) {
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

fn fixture() -> Fixture {
    let tmp = TempDir::new().unwrap();
    let seed = tmp.path().join("seed");
    fs::create_dir(&seed).unwrap();
    git(&seed, &["init", "--quiet"]);
    git(&seed, &["checkout", "--quiet", "-b", "main"]);
    configure_identity(&seed);
    fs::write(seed.join("README.md"), "hello\n").unwrap();
    git(&seed, &["add", "README.md"]);
    git(&seed, &["commit", "--quiet", "-m", "initial"]);

    git(tmp.path(), &["clone", "--quiet", "--bare", "seed", "remote.git"]);
    git(tmp.path(), &["clone", "--quiet", "remote.git", "work"]);
    let work = tmp.path().join("work");
    configure_identity(&work);

    Fixture { _tmp: tmp, work }
}

// ---------------------------------------------------------------------------
// Branches
// ---------------------------------------------------------------------------

#[test]
fn current_branch_after_clone() {
    let fx = fixture();
    assert_eq!(fx.repo().current_branch().unwrap(), "main");
}

#[test]
fn default_branch_from_symbolic_ref() {
    let fx = fixture();
    assert_eq!(fx.repo().default_branch(DEFAULT_REMOTE).unwrap(), "main");
}

#[test]
fn default_branch_from_remote_show_when_head_ref_missing() {
    let fx = fixture();
    git(&fx.work, &["remote", "set-head", "origin", "-d"]);
    assert_eq!(fx.repo().default_branch(DEFAULT_REMOTE).unwrap(), "main");
}

#[test]
fn default_branch_of_unknown_remote_fails() {
    let fx = fixture();
    let err = fx.repo().default_branch("nowhere").unwrap_err();
    assert_eq!(err.to_string(), "無法取得 default branch");
}

#[test]
fn create_branch_from_remote_default() {
    let fx = fixture();
    let repo = fx.repo();
    assert_eq!(
        repo.create_branch("feat/x", DEFAULT_REMOTE).unwrap(),
        "已從 origin/main 建立並切換到分支: feat/x"
    );
    assert_eq!(repo.current_branch().unwrap(), "feat/x");
    assert!(repo.branch_exists("feat/x").unwrap());
}

#[test]
fn create_existing_branch_keeps_original_checkout() {
    let fx = fixture();
    let repo = fx.repo();
    git(&fx.work, &["branch", "taken"]);

    let err = repo.create_branch("taken", DEFAULT_REMOTE).unwrap_err();
    assert_eq!(err.step(), Some(&BranchStep::Checkout));
    assert!(err.to_string().contains("already exists"), "got: {err}");
    assert_eq!(repo.current_branch().unwrap(), "main");
}

#[test]
fn switch_branch_round_trip() {
    let fx = fixture();
    let repo = fx.repo();
    git(&fx.work, &["branch", "other"]);
    assert_eq!(repo.switch_branch("other").unwrap(), "已切換到分支: other");
    assert_eq!(repo.current_branch().unwrap(), "other");
    assert!(repo.switch_branch("missing-branch").is_err());
}

// ---------------------------------------------------------------------------
// Inspection and publishing
// ---------------------------------------------------------------------------

#[test]
fn inspection_sees_each_kind_of_change() {
    let fx = fixture();
    let repo = fx.repo();
    assert!(repo.status_summary().unwrap().is_empty());
    assert!(repo.staged_files().unwrap().is_empty());

    fx.write("README.md", "hello\nworld\n");
    fx.write("new.txt", "new\n");
    assert_eq!(repo.unstaged_files().unwrap(), vec!["README.md"]);
    assert_eq!(repo.untracked_files().unwrap(), vec!["new.txt"]);
    assert!(repo.unstaged_diff().unwrap().contains("+world"));

    repo.stage_all().unwrap();
    assert_eq!(repo.staged_files().unwrap(), vec!["README.md", "new.txt"]);
    assert!(repo.unstaged_files().unwrap().is_empty());
    assert!(repo.untracked_files().unwrap().is_empty());
    assert!(repo.staged_diff().unwrap().contains("+new"));
    assert!(repo.diff_stats().unwrap().contains("2 files changed"));
}

#[test]
fn commit_without_changes_fails() {
    let fx = fixture();
    assert!(fx.repo().commit("empty").is_err());
}

#[test]
fn stage_commit_push_sets_tracking() {
    let fx = fixture();
    let repo = fx.repo();
    repo.create_branch("feat/push", DEFAULT_REMOTE).unwrap();
    fx.write("feature.txt", "feature\n");
    repo.stage_all().unwrap();
    let summary = repo.commit("feat: add feature").unwrap();
    assert!(summary.contains("feat: add feature"), "got: {summary}");

    let outcome = repo.push("feat/push", DEFAULT_REMOTE).unwrap();
    assert_eq!(outcome.tracking, Tracking::Verified);
    assert!(
        outcome
            .to_string()
            .ends_with("✓ Upstream tracking 已設定: origin/feat/push")
    );
    assert!(repo.remote_branch_exists("feat/push", DEFAULT_REMOTE).unwrap());
}

#[test]
fn push_to_unknown_remote_fails() {
    let fx = fixture();
    assert!(fx.repo().push("main", "nowhere").is_err());
}
