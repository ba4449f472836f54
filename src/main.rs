//! main.rs
//! Entry point for ferry

use ferry::app::{Keymap, Session, WorkflowContext};
use ferry::config::Config;
use ferry::core::error::Result;
use ferry::core::{CommandExecutor, FsLister, terminal};
use ferry::utils::cli::{Cli, CliAction, print_keybinds};
use ferry::utils::{logging, normalize_path};

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[ferry] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ferry] Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.action() {
        CliAction::PrintKeybinds => {
            print_keybinds();
            return Ok(());
        }
        CliAction::InitConfig { minimal } => {
            let path = cli.config.clone().unwrap_or_else(Config::default_path);
            Config::generate_default(&path, minimal)?;
            return Ok(());
        }
        CliAction::Run => {}
    }

    let config = Config::load(cli.config.as_deref());

    let level = cli
        .log_level
        .as_deref()
        .or(config.log().level())
        .unwrap_or("info");
    let log_dir = config
        .log()
        .dir()
        .map(Path::to_path_buf)
        .unwrap_or_else(logging::default_log_dir);
    // Keep the guard alive for the whole session so buffered lines get flushed
    let _log_guard = match logging::init_tracing(&log_dir, level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("[ferry] {} (continuing without a log file)", e);
            None
        }
    };

    // An unreadable start directory surfaces on the result screen once it gets listed
    let start_dir = normalize_path(&cli.dir);
    if !start_dir.is_dir() {
        tracing::warn!(dir = %start_dir.display(), "start directory is not a readable directory");
    }
    tracing::info!(dir = %start_dir.display(), "starting session");

    let ctx = WorkflowContext::new(start_dir).with_result_delay(config.general().result_delay());
    let executor = CommandExecutor::new(config.general().move_to_trash());
    let mut session = Session::new(ctx, FsLister, executor);
    let keymap = Keymap::from_config(&config);

    terminal::run_terminal(&mut session, &keymap, &config)?;

    match session.context().outcome() {
        Some(outcome) => tracing::info!(succeeded = outcome.succeeded, "session ended"),
        None => tracing::info!("session ended without running an action"),
    }
    Ok(())
}
