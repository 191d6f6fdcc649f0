//! Line-based chooser for terminals without skim, or piped input.
//!
//! Each line typed is a case-insensitive substring query against the full
//! candidate list. One match is chosen straight away; several are listed with
//! numbers, and the next line may be a number from that listing or a new
//! query. An empty line or end of input cancels.

use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Stderr, Write};
use std::path::Path;

use color_print::cformat;
use ffir::path::format_path_for_display;

use super::Chooser;

/// Most matches listed at once; the rest are summarised.
const MAX_LISTED: usize = 20;

pub struct PromptChooser<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl PromptChooser<StdinLock<'static>, Stderr> {
    /// Read from stdin, draw on stderr so stdout stays clean for `--print`.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> PromptChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = self.output.borrow_mut();
            write!(out, "{prompt}")?;
            out.flush()?;
        }
        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&self, message: &str) -> io::Result<()> {
        writeln!(self.output.borrow_mut(), "{message}")
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R: BufRead, W: Write> Chooser for PromptChooser<R, W> {
    fn select(&self, prompt: &str, candidates: &[String]) -> anyhow::Result<Option<String>> {
        let mut listed: Vec<&String> = Vec::new();

        loop {
            let Some(input) = self.ask(prompt)? else {
                return Ok(None);
            };
            if input.is_empty() {
                return Ok(None);
            }

            if let Ok(n) = input.parse::<usize>()
                && (1..=listed.len()).contains(&n)
            {
                return Ok(Some(listed[n - 1].clone()));
            }

            if let Some(exact) = candidates.iter().find(|c| **c == input) {
                return Ok(Some(exact.clone()));
            }

            let query = input.to_lowercase();
            let matches: Vec<&String> = candidates
                .iter()
                .filter(|c| c.to_lowercase().contains(&query))
                .collect();

            match matches.len() {
                0 => {
                    self.say(&cformat!("<yellow>No match for <bold>{}</></>", input))?;
                    listed.clear();
                }
                1 => return Ok(Some(matches[0].clone())),
                _ => {
                    for (i, candidate) in matches.iter().take(MAX_LISTED).enumerate() {
                        self.say(&format!("{:>3}) {candidate}", i + 1))?;
                    }
                    if matches.len() > MAX_LISTED {
                        self.say(&cformat!(
                            "<dim>     ... and {} more; type more to narrow</>",
                            matches.len() - MAX_LISTED
                        ))?;
                    }
                    listed = matches.into_iter().take(MAX_LISTED).collect();
                }
            }
        }
    }

    fn read_path(&self, prompt: &str, base: &Path) -> anyhow::Result<Option<String>> {
        self.say(&cformat!(
            "<dim>Relative to {}</>",
            format_path_for_display(base)
        ))?;
        Ok(self.ask(prompt)?.filter(|line| !line.is_empty()))
    }
}
