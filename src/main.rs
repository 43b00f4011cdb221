//! wxsearch - Search any place and view its current weather and sea conditions
//!
//! A terminal UI application backed by the Open-Meteo geocoding, forecast
//! and marine APIs.

use std::io::{self, Stdout};
use std::panic;

use clap::Parser;
use crossterm::{
    event::{Event as TermEvent, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use wxsearch::app::App;
use wxsearch::cli::{Cli, StartupConfig};
use wxsearch::config::Config;
use wxsearch::{logging, ui};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Draws, then waits for either a key press or a finished timer/request
async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut term_events = EventStream::new();

    while !app.should_quit {
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            maybe_event = term_events.next() => match maybe_event {
                // Ignore release/repeat events so keys aren't doubled on Windows
                Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(event) = app.orchestrator.next_event() => {
                app.orchestrator.dispatch(event);
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let startup_config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = match Config::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Logging is best effort; the app runs fine without it
    if let Ok(path) = logging::init(config.log_file.as_deref()) {
        info!(log_file = %path.display(), debounce_ms = config.debounce_ms, "wxsearch starting");
    }

    let mut app = App::new(&config)?;
    app.apply_startup_config(startup_config);

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app).await;
    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}
