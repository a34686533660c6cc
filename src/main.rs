// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Echo Menu.
//!
//! A terminal harness for the accessible pause menu.
//!
//! A small grid world runs in the left pane while the menu controller owns
//! the right one. Spoken feedback is stood in for by an announcer whose cues
//! are shown on screen and written to the log.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the controller and the world, and renders the
//!   UI.
//! * An **Input Thread** forwards key events.
//! * A **Tick Thread** paces the controller, one tick per configured period.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Both worker
//! threads talk to the main thread via `std::sync::mpsc` channels.

mod announcer;
mod events;
mod game;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use echomenu::{
    Collaborators, InputFrame, MenuController,
    config::{self, AppConfig},
};
use env_logger::{Builder, Env, Target};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::OpenOptions,
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    announcer::SharedAnnouncer,
    events::{AppEvent, process_events},
    game::SharedWorld,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: MenuController,

    pub world: SharedWorld,
    pub announcer: SharedAnnouncer,

    /// Commands gathered since the last tick.
    pub frame: InputFrame,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// The controller is built from the configured layout and activated, so
    /// gameplay owns the input from the first tick.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let world = SharedWorld::default();
        let announcer = SharedAnnouncer::default();

        let mut controller = MenuController::initialize(
            &config.layout,
            Collaborators {
                feedback: Box::new(announcer.clone()),
                clock: Box::new(world.clone()),
                gameplay: Box::new(world.clone()),
            },
        );
        controller.activate();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller,
            world,
            announcer,
            frame: InputFrame::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config).context("Failed to initialise logging")?;
    info!("starting with a {}ms tick", config.tick_millis);

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    app.controller.deactivate();

    res.context("Application error occurred")
}

/// Sends log output to the configured file, truncated on each run.
///
/// The level defaults to `info` and can be changed with `RUST_LOG`.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(log_file)))
        .try_init()
        .context("Logger already initialised")?;

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This is best-effort and does not return a result.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send the periodic tick, each one is a controller tick
    // as well as a redraw.
    let tx_tick = app.event_tx.clone();
    let period = Duration::from_millis(app.config.tick_millis.max(1));
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(period);
        }
    });

    // Draw once before the first event arrives
    terminal.draw(|f| render::draw(f, app))?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
