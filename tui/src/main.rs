//! Quest TUI Entry Point
//!
//! Launches the quest carousel in the terminal.
//!
//! Usage:
//!   quest-tui [OPTIONS]
//!
//! Options:
//!   --config <PATH>       Timing config (TOML)
//!   --deck <PATH>         Slide deck (TOML or JSON)
//!   --tick-ms <MS>        Auto-advance interval (default: 5000)
//!   --cooldown-ms <MS>    Pause after manual navigation (default: 8000)
//!   --scheme <SCHEME>     light or dark
//!   --log-file <PATH>     Where to write logs

use std::fs::File;
use std::io;
use std::panic;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quest_tui::cli::Args;
use quest_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Set up logging; stdout belongs to the UI, so only log to a file
    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let config = args.resolve_config()?;
    let deck = args.resolve_deck()?;
    let scheme = args.resolve_scheme();

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: quest-tui requires a terminal (TTY)");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let mut app = App::new(deck, config, scheme).with_hints(!args.no_hints);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Propagate any errors
    result
}
