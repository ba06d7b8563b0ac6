//! Terminal entry point for hedgehog-tui.
//!
//! Sets up the terminal, builds the application state, and runs the
//! cooperative dispatch loop: drain the profile reload flag, advance
//! any in-flight animation, draw, then poll for a key press.

mod app;
mod cli;
mod engine;
mod models;
mod theme;
mod ui;
mod watcher;

use std::io::{self, stdout};
use std::sync::Mutex;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;
    init_logging();
    info!(version = cli::VERSION, "starting hedgehog-tui");

    let mut app = App::new(config)?;

    // Keep the watcher alive for the lifetime of the loop; dropping it
    // stops the reload notifications.
    let _watcher = app
        .profile_path
        .clone()
        .and_then(|path| watcher::setup_profile_watcher(path, app.profile_needs_reload.clone()));

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    info!("goodbye");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.reload_profile_if_needed();
        app.advance_playback();
        app.update_animation_tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Log to a file under the user state directory so tracing output
/// never lands on the terminal the UI owns. Best-effort: any failure
/// leaves logging uninstalled.
fn init_logging() {
    let Some(dir) = dirs::state_dir().or_else(dirs::cache_dir) else {
        return;
    };
    let log_dir = dir.join("hedgehog-tui");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(log_dir.join("hedgehog-tui.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
