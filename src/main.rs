use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use ffir::FindError;
use ffir::config::{UserConfig, set_config_path};
use ffir::shell_exec::ShellRunner;
use ffir::styling::{ERROR, ERROR_EMOJI, eprintln};

mod cli;
mod commands;
mod picker;

use cli::{Cli, Commands};
use commands::{FindContext, Outcome, find_file_in_repository, handle_list, handle_root};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(path) = &cli.config {
        set_config_path(path.clone());
    }

    if let Err(err) = run(cli) {
        match err.downcast_ref::<FindError>() {
            Some(find_err) => eprintln!("{}", find_err.styled()),
            None => eprintln!("{ERROR_EMOJI} {ERROR}{err:#}{ERROR:#}"),
        }
        process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = UserConfig::load()?;
    cli.apply_overrides(&mut config);

    let locator = config.locator();
    let runner = ShellRunner::new(config.timeout());

    match &cli.command {
        Some(Commands::Root { directory }) => handle_root(&start_dir(directory.as_deref()), &locator),
        Some(Commands::List { directory, nul }) => {
            handle_list(&start_dir(directory.as_deref()), &locator, &runner, *nul)
        }
        None => {
            let chooser = picker::chooser_for(config.chooser());
            let opener = commands::open::opener_for(cli.print, config.editor());
            let ctx = FindContext {
                locator: &locator,
                runner: &runner,
                chooser: chooser.as_ref(),
                opener: opener.as_ref(),
                prompt: config.prompt(),
            };

            match find_file_in_repository(&start_dir(cli.directory.as_deref()), &ctx)? {
                Outcome::Opened(path) => log::info!("Opened {}", path.display()),
                Outcome::Cancelled => log::info!("Cancelled"),
            }
            Ok(())
        }
    }
}

fn start_dir(directory: Option<&Path>) -> PathBuf {
    directory
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
