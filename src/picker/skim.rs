//! Fuzzy chooser backed by skim.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use skim::prelude::*;

use super::Chooser;

/// Full-screen fuzzy picker. Draws on the terminal, so only use it when
/// stdin and stderr are TTYs.
pub struct SkimChooser;

fn picker_options(prompt: &str) -> anyhow::Result<SkimOptions> {
    SkimOptionsBuilder::default()
        .prompt(prompt.to_string())
        .height("50%".to_string())
        .reverse(true)
        .multi(false)
        .build()
        .context("Failed to configure picker")
}

impl SkimChooser {
    fn run(&self, prompt: &str, items: Vec<String>) -> anyhow::Result<Option<SkimOutput>> {
        let options = picker_options(prompt)?;

        let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();
        for item in items {
            // Receiver outlives this loop; send only fails if skim already exited
            let _ = tx.send(Arc::new(item));
        }
        drop(tx);

        Ok(Skim::run_with(&options, Some(rx)))
    }
}

impl Chooser for SkimChooser {
    fn select(&self, prompt: &str, candidates: &[String]) -> anyhow::Result<Option<String>> {
        let Some(output) = self.run(prompt, candidates.to_vec())? else {
            return Ok(None);
        };
        if output.is_abort {
            return Ok(None);
        }
        Ok(output
            .selected_items
            .first()
            .map(|item| item.output().into_owned()))
    }

    /// Offers the entries directly inside `base`; Enter on a non-matching
    /// query returns the query itself, so new or nested paths can be typed.
    fn read_path(&self, prompt: &str, base: &Path) -> anyhow::Result<Option<String>> {
        let Some(output) = self.run(prompt, directory_entries(base))? else {
            return Ok(None);
        };
        if output.is_abort {
            return Ok(None);
        }
        if let Some(item) = output.selected_items.first() {
            return Ok(Some(item.output().into_owned()));
        }
        let query = output.query.trim();
        Ok((!query.is_empty()).then(|| query.to_string()))
    }
}

/// Names in `base`, sorted, with a trailing `/` on directories.
fn directory_entries(base: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(base) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| {
            let mut name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                name.push('/');
            }
            name
        })
        .collect();
    names.sort();
    names
}
