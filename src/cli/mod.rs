use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use ffir::config::{ChooserKind, UserConfig};

/// Find a file in the enclosing repository.
///
/// Walks up from DIRECTORY (default: current directory) to the nearest
/// checkout marked by .git, .hg, _darcs, .bzr, _MTN or .svn, lists the files
/// its VCS tracks, and lets you pick one to open in $VISUAL / $EDITOR.
/// Outside a repository, asks for a path instead.
#[derive(Parser, Debug)]
#[command(name = "ffir", version, about, long_about)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to start from
    pub directory: Option<PathBuf>,

    /// Print the chosen path instead of opening it
    #[arg(long)]
    pub print: bool,

    /// Picker to use
    #[arg(long, value_enum)]
    pub chooser: Option<ChooserKind>,

    /// Config file (default: $FFIR_CONFIG_PATH, then ~/.config/ffir/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Accept the home directory as a repository root
    #[arg(long, global = true)]
    pub allow_home: bool,

    /// Seconds to wait for the VCS tool; 0 waits forever
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the repository root and the marker that identified it
    Root {
        /// Directory to start from
        directory: Option<PathBuf>,
    },

    /// Print the files the repository's VCS tracks
    List {
        /// Directory to start from
        directory: Option<PathBuf>,

        /// Terminate entries with NUL instead of newline
        #[arg(short = 'z', long = "null")]
        nul: bool,
    },
}

impl Cli {
    /// Fold command-line overrides into the file config.
    pub fn apply_overrides(&self, config: &mut UserConfig) {
        if self.allow_home {
            config.avoid_home = Some(false);
        }
        if let Some(timeout) = self.timeout {
            config.timeout = Some(timeout);
        }
        if let Some(chooser) = self.chooser {
            config.chooser = Some(chooser);
        }
    }
}
