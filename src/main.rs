//! crypto-predict - terminal widget for simulated crypto price predictions
//!
//! Pick one of twenty assets and a horizon, and get a randomly generated
//! forecast after a short simulated delay. Nothing here talks to a market
//! data source; every result is flagged as simulated.

mod app;
mod config;
mod market;
mod prediction;
mod session;
mod themes;
mod ui;
mod views;
mod widgets;

use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout belongs to the TUI, so log to a file
    let log_path = config::log_file();
    let log_file = File::create(&log_path)
        .with_context(|| format!("creating log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let settings = Settings::load();
    info!(?settings, "Starting crypto-predict");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create and run app
    let mut app = App::new(&settings);
    let result = app.run().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    result
}
