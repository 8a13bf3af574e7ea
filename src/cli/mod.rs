pub mod args;
pub mod commands;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Execute the CLI with parsed arguments
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so its logs go to a file
    let log_target = match cli.command {
        None | Some(Commands::Edit(_)) => LogTarget::File,
        Some(_) => LogTarget::Stderr,
    };
    setup_logging(cli.verbose, cli.quiet, log_target)?;

    dispatch(cli).await
}

/// Run the selected subcommand. The config file is only read by the
/// commands that use it.
async fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Edit(args)) => {
            commands::edit::execute(args, Config::load(config_path)?).await
        }
        Some(Commands::Config(args)) => commands::config::execute(args, config_path).await,
        Some(Commands::Time(args)) => commands::time::execute(args).await,
        None => {
            // No subcommand provided - launch TUI mode
            launch_tui(crate::app::App::new(Config::load(config_path)?)).await
        }
    }
}

/// Launch the TUI interface
pub(crate) async fn launch_tui(mut app: crate::app::App) -> Result<()> {
    use crossterm::{
        event::EnableMouseCapture,
        execute,
        terminal::{enable_raw_mode, EnterAlternateScreen},
    };
    use ratatui::prelude::*;
    use std::io;
    use std::panic;

    // Setup panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("Starting editor");
    let result = app.run(&mut terminal).await;

    // Restore terminal
    restore_terminal()?;
    if let Err(err) = &result {
        tracing::error!("Editor exited with error: {:#}", err);
    }

    result
}

fn restore_terminal() -> Result<()> {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };

    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogTarget {
    File,
    Stderr,
}

/// `<cache dir>/caption-editor-tui/caption-editor.log`
pub fn log_file_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("caption-editor-tui")
        .join("caption-editor.log")
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn setup_logging(verbose: u8, quiet: bool, target: LogTarget) -> Result<()> {
    use std::sync::Mutex;
    use tracing_subscriber::{fmt, EnvFilter};

    if quiet {
        return Ok(());
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    match target {
        LogTarget::Stderr => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::File => {
            let path = log_file_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}
