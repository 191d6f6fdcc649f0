//! Cross-platform shell execution
//!
//! Provides a unified interface for executing shell commands across platforms:
//! - Unix: Uses `/bin/sh -c`
//! - Windows: Prefers Git Bash if available, falls back to PowerShell
//!
//! Listing commands and editor launches go through [`ShellConfig`]. The
//! [`CommandRunner`] trait is the seam the lister depends on, so tests can
//! substitute canned output for real VCS tools.

use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use wait_timeout::ChildExt;

use crate::error::FindError;

/// Cached shell configuration for the current platform
static SHELL_CONFIG: OnceLock<ShellConfig> = OnceLock::new();

/// Shell configuration for command execution
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Path to the shell executable
    pub executable: PathBuf,
    /// Arguments to pass before the command (e.g., ["-c"] for sh)
    pub args: Vec<String>,
    /// Whether this is a POSIX-compatible shell (bash/sh)
    pub is_posix: bool,
    /// Human-readable name for error messages
    pub name: String,
}

impl ShellConfig {
    /// Get the shell configuration for the current platform
    ///
    /// On Unix, this always returns sh.
    /// On Windows, this prefers Git Bash if available, then falls back to PowerShell.
    pub fn get() -> &'static ShellConfig {
        SHELL_CONFIG.get_or_init(detect_shell)
    }

    /// Create a Command configured for shell execution
    ///
    /// The command string will be passed to the shell for interpretation.
    pub fn command(&self, shell_command: &str) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(&self.args);
        cmd.arg(shell_command);
        cmd
    }

    pub fn is_posix(&self) -> bool {
        self.is_posix
    }

    /// Quote `arg` so this shell reads it as one literal word.
    ///
    /// POSIX shells get `shell_escape`'s sh quoting; PowerShell gets single
    /// quotes with embedded quotes doubled. Words made only of path-safe
    /// characters pass through unquoted.
    pub fn quote<'a>(&self, arg: &'a str) -> Cow<'a, str> {
        if self.is_posix {
            shell_escape::unix::escape(Cow::Borrowed(arg))
        } else {
            powershell_quote(arg)
        }
    }
}

fn powershell_quote(arg: &str) -> Cow<'_, str> {
    let safe = !arg.is_empty()
        && arg.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '\\' | ':')
        });
    if safe {
        Cow::Borrowed(arg)
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', "''")))
    }
}

/// Detect the best available shell for the current platform
fn detect_shell() -> ShellConfig {
    #[cfg(unix)]
    {
        ShellConfig {
            executable: PathBuf::from("sh"),
            args: vec!["-c".to_string()],
            is_posix: true,
            name: "sh".to_string(),
        }
    }

    #[cfg(windows)]
    {
        detect_windows_shell()
    }
}

/// Detect the best available shell on Windows
///
/// Priority order:
/// 1. Git Bash (if Git for Windows is installed)
/// 2. PowerShell (fallback; `cd ... && ...` needs PowerShell 7)
#[cfg(windows)]
fn detect_windows_shell() -> ShellConfig {
    if let Some(bash_path) = find_git_bash() {
        return ShellConfig {
            executable: bash_path,
            args: vec!["-c".to_string()],
            is_posix: true,
            name: "Git Bash".to_string(),
        };
    }

    ShellConfig {
        executable: PathBuf::from("powershell.exe"),
        args: vec!["-NoProfile".to_string(), "-Command".to_string()],
        is_posix: false,
        name: "PowerShell".to_string(),
    }
}

/// Find Git Bash in the standard Git for Windows locations, or next to
/// `git.exe` on PATH.
#[cfg(windows)]
fn find_git_bash() -> Option<PathBuf> {
    let standard_paths = [
        r"C:\Program Files\Git\bin\bash.exe",
        r"C:\Program Files (x86)\Git\bin\bash.exe",
        r"C:\Git\bin\bash.exe",
    ];

    if let Some(path) = standard_paths
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
    {
        return Some(path);
    }

    // git.exe is typically at Git/cmd/git.exe; bash.exe is at Git/bin/bash.exe
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join("git.exe"))
        .find(|candidate| candidate.exists())
        .and_then(|git| git.parent()?.parent().map(|p| p.join("bin").join("bash.exe")))
        .filter(|bash| bash.exists())
}

/// Captured output of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Runs a shell command in a directory and captures what it prints.
///
/// Implementations report failures as [`FindError`] variants: a non-zero
/// exit is `CommandFailed` (or `ToolNotFound` for exit 127), an overrun is
/// `Timeout`, and a shell that can't start is `Spawn`.
pub trait CommandRunner {
    fn run(&self, dir: &Path, command: &str) -> Result<CommandOutput, FindError>;
}

/// Runs commands through the platform shell with an optional time limit.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    pub timeout: Option<Duration>,
}

impl ShellRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, dir: &Path, command: &str) -> Result<CommandOutput, FindError> {
        let started = Instant::now();
        let shell = ShellConfig::get();
        log::debug!("$ {command} [{}] via {}", dir.display(), shell.name);

        let spawn_error = |source| FindError::Spawn {
            command: command.to_string(),
            source,
        };

        let mut child = shell
            .command(command)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // Drain both pipes on threads so a chatty tool can't fill a pipe
        // buffer and stall before we get to wait().
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match self.timeout {
            Some(limit) => match child.wait_timeout(limit).map_err(spawn_error)? {
                Some(status) => status,
                None => {
                    log::debug!("Timed out after {limit:?}: {command}");
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(FindError::Timeout {
                        command: command.to_string(),
                        timeout: limit,
                    });
                }
            },
            None => child.wait().map_err(spawn_error)?,
        };

        let output = CommandOutput {
            stdout: join(stdout),
            stderr: join(stderr),
        };
        log::debug!(
            "  exit {:?} in {:?}, {} bytes",
            status.code(),
            started.elapsed(),
            output.stdout.len()
        );

        if status.success() {
            return Ok(output);
        }

        Err(FindError::CommandFailed {
            command: command.to_string(),
            root: dir.to_path_buf(),
            exit_code: status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

fn join(handle: JoinHandle<Vec<u8>>) -> Vec<u8> {
    handle.join().unwrap_or_default()
}
