//! Shared fixtures for integration tests.
//!
//! Every command runs with an isolated `HOME` and `FFIR_CONFIG_PATH`, no
//! editor, and no `RUST_LOG`, so the developer's environment can't leak in.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use rstest::fixture;
use tempfile::TempDir;

/// Marker no real directory has, for tests that need "no repository anywhere".
pub const ISOLATED_CONFIG: &str = r#"
replace-defaults = true

[[vcs]]
marker = ".ffir-test-marker"
command = "true"
separator = "newline"
"#;

/// A temporary environment: a home directory, a config path, and a scratch
/// area for repositories.
pub struct TestEnv {
    temp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("home")).unwrap();
        Self { temp }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn home(&self) -> PathBuf {
        self.temp.path().join("home")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.toml")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.config_path(), contents).unwrap();
    }

    /// `ffir` with the environment isolated to this test.
    pub fn ffir(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ffir"));
        cmd.env("HOME", self.home())
            .env("FFIR_CONFIG_PATH", self.config_path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("VISUAL")
            .env_remove("EDITOR");
        cmd
    }
}

/// A git repository with `README.md` and `src/deep/file.txt` staged.
pub struct TestRepo {
    pub env: TestEnv,
    root: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let env = TestEnv::new();
        let root = env.path().join("repo");
        fs::create_dir_all(root.join("src").join("deep")).unwrap();
        fs::write(root.join("README.md"), "# repo\n").unwrap();
        fs::write(root.join("src").join("deep").join("file.txt"), "hello\n").unwrap();

        let repo = Self { env, root };
        repo.git(&["init", "-q"]);
        repo.git(&["add", "README.md", "src/deep/file.txt"]);
        repo
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .env("HOME", self.env.home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .stdout(Stdio::null())
            .status()
            .unwrap();
        assert!(status.success(), "git {args:?} failed");
    }
}

#[fixture]
pub fn env() -> TestEnv {
    TestEnv::new()
}

#[fixture]
pub fn repo() -> TestRepo {
    TestRepo::new()
}

/// Run `cmd` feeding `stdin`, and collect its output.
pub fn run_with_stdin(mut cmd: Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
