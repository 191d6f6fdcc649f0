//! Interactive choosers.
//!
//! A [`Chooser`] picks one candidate from a list, or reads a free-form path
//! when there's no list to offer. main.rs decides which implementation to use
//! before any repository work starts; the find flow only sees the trait.

mod prompt;
#[cfg(unix)]
mod skim;

use std::io::IsTerminal;
use std::path::Path;

use ffir::config::ChooserKind;

pub use prompt::PromptChooser;
#[cfg(unix)]
pub use skim::SkimChooser;

pub trait Chooser {
    /// Let the user pick one of `candidates`. `None` means cancelled.
    fn select(&self, prompt: &str, candidates: &[String]) -> anyhow::Result<Option<String>>;

    /// Ask for a path, relative to `base` unless absolute. `None` means
    /// cancelled.
    fn read_path(&self, prompt: &str, base: &Path) -> anyhow::Result<Option<String>>;
}

/// Build the chooser for `kind`.
///
/// `Auto` uses skim only when both stdin and stderr are terminals; skim draws
/// on the terminal and reads keys, so piped input falls back to the prompt.
pub fn chooser_for(kind: ChooserKind) -> Box<dyn Chooser> {
    match kind {
        ChooserKind::Prompt => Box::new(PromptChooser::stdio()),
        ChooserKind::Skim => fuzzy_chooser(),
        ChooserKind::Auto => {
            if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
                fuzzy_chooser()
            } else {
                log::debug!("Not a terminal; using the line prompt");
                Box::new(PromptChooser::stdio())
            }
        }
    }
}

#[cfg(unix)]
fn fuzzy_chooser() -> Box<dyn Chooser> {
    Box::new(SkimChooser)
}

#[cfg(not(unix))]
fn fuzzy_chooser() -> Box<dyn Chooser> {
    log::warn!("The fuzzy picker is only available on Unix; using the line prompt");
    Box::new(PromptChooser::stdio())
}
