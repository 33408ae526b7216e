use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::filter::LevelFilter;

use menu_builder::cli::{Cli, Command};
use menu_builder::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The editor owns the terminal, so only warnings may reach stderr
    let interactive = matches!(cli.command, Command::Edit(_));
    init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref(), interactive)?;

    // Load configuration
    let mut config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Edit(args) => {
            tracing::info!(?args, "Starting editor");
            if args.show_keys {
                config.tui.show_keys = true;
            }
            if args.no_confirm {
                config.tui.confirm_delete = false;
            }
            if args.prefill {
                config.editor.prefill_edit_draft = true;
            }
            menu_builder::tui::run(&config)?;
        }
        Command::Completions(args) => {
            let mut command = Cli::command();
            clap_complete::generate(
                args.shell,
                &mut command,
                "menu-builder",
                &mut std::io::stdout(),
            );
        }
        Command::Man => {
            clap_mangen::Man::new(Cli::command()).render(&mut std::io::stdout())?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = default_level(verbosity, quiet, interactive && log_file.is_none());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("menu_builder={}", level)));

    let (file_layer, stderr_layer) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file '{}'", path.display()))?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => {
            // RUST_LOG may ask for more, but the editor screen must stay clean
            let layer = fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(stderr_ceiling(interactive));
            (None, Some(layer))
        }
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(filter)
        .init();

    Ok(())
}

/// Level used when `RUST_LOG` is not set.
fn default_level(verbosity: u8, quiet: bool, screen_owned: bool) -> &'static str {
    if quiet || screen_owned {
        return "warn";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Most verbose level the stderr layer passes through.
fn stderr_ceiling(interactive: bool) -> LevelFilter {
    if interactive {
        LevelFilter::WARN
    } else {
        LevelFilter::TRACE
    }
}
