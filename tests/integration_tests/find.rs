//! Integration tests for the default find flow, driven through the line prompt.

use crate::common::{
    ISOLATED_CONFIG, TestEnv, TestRepo, env, repo, run_with_stdin, stderr, stdout,
};
use rstest::rstest;

#[rstest]
fn test_pick_tracked_file(repo: TestRepo) {
    let mut cmd = repo.env.ffir();
    cmd.args(["--print", "--chooser", "prompt"])
        .arg(repo.root().join("src").join("deep"));

    let output = run_with_stdin(cmd, "file.txt\n");

    assert!(output.status.success(), "{}", stderr(&output));
    let picked = repo.root().join("src").join("deep").join("file.txt");
    assert_eq!(stdout(&output), format!("{}\n", picked.display()));
    assert!(picked.exists());
}

#[rstest]
fn test_prompt_goes_to_stderr(repo: TestRepo) {
    let mut cmd = repo.env.ffir();
    cmd.args(["--print", "--chooser", "prompt"]).arg(repo.root());

    let output = run_with_stdin(cmd, "readme\n");

    assert!(stderr(&output).contains("Find file in repository: "));
    assert!(stdout(&output).ends_with("README.md\n"));
}

#[rstest]
fn test_custom_prompt(repo: TestRepo) {
    repo.env.write_config("prompt = \"pick> \"\n");
    let mut cmd = repo.env.ffir();
    cmd.args(["--print", "--chooser", "prompt"]).arg(repo.root());

    let output = run_with_stdin(cmd, "\n");

    assert!(stderr(&output).contains("pick> "));
}

#[rstest]
fn test_cancel_prints_nothing(repo: TestRepo) {
    let mut cmd = repo.env.ffir();
    cmd.args(["--print", "--chooser", "prompt"]).arg(repo.root());

    let output = run_with_stdin(cmd, "");

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).is_empty());
}

#[rstest]
fn test_outside_repository_opens_by_path(env: TestEnv) {
    env.write_config(ISOLATED_CONFIG);
    let mut cmd = env.ffir();
    cmd.args(["--print", "--chooser", "prompt"]).arg(env.path());

    let output = run_with_stdin(cmd, "notes.txt\n");

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("{}\n", env.path().join("notes.txt").display())
    );
    assert!(stderr(&output).contains("Find file: "));
}

#[rstest]
fn test_editor_opens_choice(repo: TestRepo) {
    let record = repo.env.path().join("opened");
    repo.env.write_config(&format!(
        "editor = '''sh -c 'printf %s \"$1\" > {}' editor'''\n",
        record.display()
    ));
    let mut cmd = repo.env.ffir();
    cmd.args(["--chooser", "prompt"]).arg(repo.root());

    let output = run_with_stdin(cmd, "src/deep/file.txt\n");

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        std::fs::read_to_string(&record).unwrap(),
        repo.root().join("src/deep/file.txt").display().to_string()
    );
}
