use std::sync::Arc;

use clap::Parser;
use taskboard::cli::commands::Cli;
use taskboard::cli::handlers;
use taskboard::io::config_io;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            init_logging(true);
            if let Err(e) = run_tui(cli.url.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            init_logging(false);
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_tui(url_flag: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(&cwd)?;
    let base_url = config_io::resolve_base_url(
        url_flag,
        std::env::var("TASKBOARD_URL").ok(),
        &config,
    );
    taskboard::tui::run(&config, base_url)
}

/// Install the tracing subscriber when TASKBOARD_LOG is set. CLI runs log
/// to stderr; the TUI owns the terminal, so its logs go to a file.
fn init_logging(tui_mode: bool) {
    let Ok(filter) = std::env::var("TASKBOARD_LOG") else {
        return;
    };
    if filter.is_empty() {
        return;
    }
    let env_filter = tracing_subscriber::EnvFilter::new(filter);

    if tui_mode {
        let Ok(file) = std::fs::File::options()
            .create(true)
            .append(true)
            .open("taskboard.log")
        else {
            return;
        };
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
