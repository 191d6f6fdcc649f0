//! Integration tests for `ffir list`

use std::fs;

use crate::common::{TestEnv, TestRepo, env, repo, stderr, stdout};
use rstest::rstest;

/// A repository marked by `.fake`, listed by `command`.
fn fake_vcs(env: &TestEnv, command: &str, separator: &str) -> std::path::PathBuf {
    env.write_config(&format!(
        r#"
replace-defaults = true

[[vcs]]
marker = ".fake"
command = '{command}'
separator = "{separator}"
"#
    ));
    let root = env.path().join("fake-repo");
    fs::create_dir_all(root.join(".fake")).unwrap();
    root
}

#[rstest]
fn test_list_from_deep_directory(repo: TestRepo) {
    let output = repo
        .env
        .ffir()
        .arg("list")
        .arg(repo.root().join("src").join("deep"))
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    let listed = stdout(&output);
    let files: Vec<_> = listed.lines().collect();
    assert!(files.contains(&"src/deep/file.txt"), "got {files:?}");
    assert!(files.contains(&"README.md"));
}

#[rstest]
fn test_list_null_terminated(repo: TestRepo) {
    let output = repo
        .env
        .ffir()
        .args(["list", "-z"])
        .arg(repo.root())
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "README.md\0src/deep/file.txt\0");
}

#[rstest]
fn test_untracked_files_are_not_listed(repo: TestRepo) {
    fs::write(repo.root().join("scratch.txt"), "").unwrap();

    let output = repo.env.ffir().arg("list").arg(repo.root()).output().unwrap();
    assert!(!stdout(&output).contains("scratch.txt"));
}

#[rstest]
fn test_empty_entries_are_dropped(env: TestEnv) {
    let root = fake_vcs(&env, r#"printf "a\0\0b\0""#, "nul");

    let output = env.ffir().arg("list").arg(&root).output().unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "a\nb\n");
}

#[rstest]
fn test_missing_tool_is_reported(env: TestEnv) {
    let root = fake_vcs(&env, "ffir-missing-vcs-tool ls", "newline");

    let output = env.ffir().arg("list").arg(&root).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("ffir-missing-vcs-tool"), "{err}");
    assert!(err.contains("is not installed"), "{err}");
}

#[rstest]
fn test_failing_tool_shows_its_stderr(env: TestEnv) {
    let root = fake_vcs(&env, "echo index is corrupt >&2; exit 2", "newline");

    let output = env.ffir().arg("list").arg(&root).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("exit 2"), "{err}");
    assert!(err.contains("index is corrupt"), "{err}");
}

#[rstest]
fn test_slow_tool_times_out(env: TestEnv) {
    let root = fake_vcs(&env, "sleep 10", "newline");

    let started = std::time::Instant::now();
    let output = env
        .ffir()
        .args(["list", "--timeout", "1"])
        .arg(&root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("did not finish"));
    assert!(started.elapsed() < std::time::Duration::from_secs(8));
}
