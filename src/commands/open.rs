//! Opening the chosen file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use ffir::path::format_path_for_display;
use ffir::shell_exec::ShellConfig;

pub trait Opener {
    fn open(&self, path: &Path) -> anyhow::Result<()>;
}

/// Writes the path to stdout, for `ffir --print | xargs ...` and editor
/// integrations that open the file themselves.
pub struct PrintOpener;

impl Opener for PrintOpener {
    fn open(&self, path: &Path) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", path.display())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Runs `<editor> <path>` through the shell with the terminal attached.
pub struct EditorOpener {
    pub editor: String,
}

impl Opener for EditorOpener {
    fn open(&self, path: &Path) -> anyhow::Result<()> {
        let command = editor_command(&self.editor, path);
        log::debug!("$ {command}");

        let status = ShellConfig::get()
            .command(&command)
            .status()
            .with_context(|| format!("Failed to start editor '{}'", self.editor))?;

        if !status.success() {
            bail!(
                "Editor '{}' exited with {} while opening {}",
                self.editor,
                status,
                format_path_for_display(path)
            );
        }
        Ok(())
    }
}

/// The editor is a shell fragment (it may carry flags); the path is escaped.
fn editor_command(editor: &str, path: &Path) -> String {
    editor_command_for(ShellConfig::get(), editor, path)
}

fn editor_command_for(shell: &ShellConfig, editor: &str, path: &Path) -> String {
    let path = path.to_string_lossy();
    format!("{} {}", editor, shell.quote(&path))
}

/// Pick the editor: config value, then `$VISUAL`, then `$EDITOR`.
pub fn resolve_editor(configured: Option<&str>) -> Option<String> {
    configured
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|e| !e.trim().is_empty())
}

/// `--print`, or no editor anywhere, means print.
pub fn opener_for(print: bool, configured_editor: Option<&str>) -> Box<dyn Opener> {
    if print {
        return Box::new(PrintOpener);
    }
    match resolve_editor(configured_editor) {
        Some(editor) => Box::new(EditorOpener { editor }),
        None => {
            log::info!("No editor configured ($VISUAL, $EDITOR); printing the path");
            Box::new(PrintOpener)
        }
    }
}
