//! TUI application state machine
//!
//! Split into functional submodules:
//! - lists.rs: list collection refresh and selection
//! - tasks.rs: task fetching and display mode
//! - events.rs: async action execution

mod events;
mod lists;
mod tasks;

use crate::error::TuiError;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use taskdeck_api::ApiClient;
use taskdeck_config::Config;
use tokio::sync::mpsc;

type Result<T> = std::result::Result<T, TuiError>;

use super::input::handle_input_sync;
use super::layout::draw;
use super::state::{AsyncAction, ListTabsState, TaskViewState};

/// Application state
///
/// All mutable state lives here and is only ever touched from the event
/// loop, so fetch results are applied by plain methods with no locking.
pub struct App {
    pub client: ApiClient,

    /// List tabs and the active selection
    pub lists: ListTabsState,
    /// Tasks for the selected list, filtered by display mode
    pub task_view: TaskViewState,

    /// Latest fetch failure, templated for display; overwritten by each
    /// new failure, cleared by the next success
    pub error_message: Option<String>,
    pub should_quit: bool,

    pub config: Config,
}

impl App {
    pub fn new(client: ApiClient, config: Config) -> Self {
        let mut task_view = TaskViewState::default();
        if config.options.display_done {
            task_view.mode = super::state::DisplayMode::Done;
        }
        Self {
            client,
            lists: ListTabsState::default(),
            task_view,
            error_message: None,
            should_quit: false,
            config,
        }
    }
}

/// Spawn a thread to read crossterm events (blocking I/O)
fn spawn_input_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel(32);

    std::thread::spawn(move || {
        while let Ok(event) = event::read() {
            if tx.blocking_send(event).is_err() {
                break; // Receiver dropped
            }
        }
    });

    rx
}

/// Run the TUI application
pub async fn run(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(TuiError::TerminalInit)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TuiError::TerminalInit)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(TuiError::TerminalInit)?;

    let result = run_loop(&mut app, &mut terminal).await;

    // Restore terminal even when the loop errored
    disable_raw_mode().map_err(TuiError::TerminalRestore)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(TuiError::TerminalRestore)?;
    terminal.show_cursor().map_err(TuiError::TerminalRestore)?;

    result
}

async fn run_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    // Spawn input reader thread (crossterm events are blocking)
    let mut input_rx = spawn_input_reader();

    // Fixed 16ms render interval (~60fps)
    let mut render_interval = tokio::time::interval(std::time::Duration::from_millis(16));
    render_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // Actions queue one deep; executed on the render tick. Because each
    // action is awaited to completion here, a task fetch for an older
    // selection can never land after a newer one.
    let mut pending_action: Option<AsyncAction> = Some(AsyncAction::RefreshLists);

    loop {
        tokio::select! {
            biased; // Check branches in priority order

            // 1. Keyboard input
            Some(event) = input_rx.recv() => {
                match event {
                    Event::Key(key) => {
                        if let Some(action) = handle_input_sync(app, key) {
                            // If already have a pending action, execute it immediately
                            if let Some(old_action) = pending_action.take() {
                                if let Some(next) = app.execute_async_action(old_action).await {
                                    let _ = app.execute_async_action(next).await;
                                }
                            }
                            pending_action = Some(action);
                        }
                    }
                    // Resize is picked up by the next draw
                    _ => {}
                }
            }

            // 2. Render tick
            _ = render_interval.tick() => {
                if let Some(action) = pending_action.take() {
                    // Fetch failures become the error message inside the
                    // action; a follow-up fetch may be queued
                    pending_action = app.execute_async_action(action).await;
                }

                terminal.draw(|f| draw(f, app)).map_err(TuiError::Render)?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
