//! Integration tests for `ffir root`

use crate::common::{ISOLATED_CONFIG, TestEnv, TestRepo, env, repo, stderr, stdout};
use rstest::rstest;

#[rstest]
fn test_root_from_nested_directory(repo: TestRepo) {
    let output = repo
        .env
        .ffir()
        .arg("root")
        .arg(repo.root().join("src").join("deep"))
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("{}\t.git\n", repo.root().display())
    );
}

#[rstest]
fn test_root_uses_current_directory(repo: TestRepo) {
    let output = repo
        .env
        .ffir()
        .arg("root")
        .current_dir(repo.root().join("src"))
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).ends_with("\t.git\n"));
}

#[rstest]
fn test_root_outside_repository_fails(env: TestEnv) {
    env.write_config(ISOLATED_CONFIG);

    let output = env.ffir().arg("root").arg(env.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("No repository found"));
}

#[rstest]
fn test_home_directory_is_not_a_root(repo: TestRepo) {
    let output = repo
        .env
        .ffir()
        .env("HOME", repo.root())
        .arg("root")
        .arg(repo.root().join("src"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let output = repo
        .env
        .ffir()
        .env("HOME", repo.root())
        .arg("root")
        .arg("--allow-home")
        .arg(repo.root().join("src"))
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
}

#[rstest]
fn test_avoid_home_from_config(repo: TestRepo) {
    repo.env.write_config("avoid-home = false\n");

    let output = repo
        .env
        .ffir()
        .env("HOME", repo.root())
        .arg("root")
        .arg(repo.root())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
}

#[rstest]
fn test_invalid_config_is_reported(env: TestEnv) {
    env.write_config("avoid-home = \"sometimes\"\n");

    let output = env.ffir().arg("root").arg(env.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid config"));
}
