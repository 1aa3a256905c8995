//! Library entry point for the networking recommendations TUI.
//!
//! Provides a reusable [`run`] function that launches the Ratatui terminal UI
//! against a configured [`DatasetLoader`].

mod app;
mod event;
pub mod state;
mod ui;

pub use state::{Phase, SearchOutcome, SessionEvent, SessionState};

use anyhow::anyhow;
use app::App;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyModifiers, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use event::AppEvent;
use log::{debug, info, warn};
use netrec_rs_config::{DEFAULT_PLACEHOLDER, DEFAULT_TITLE, UiConfig};
use netrec_rs_core::DatasetLoader;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

/// Configuration for the TUI session.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Header title.
    pub title: String,
    /// Placeholder text for the empty input box.
    pub placeholder: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl From<&UiConfig> for TuiConfig {
    fn from(ui: &UiConfig) -> Self {
        Self {
            title: ui.title.clone(),
            placeholder: ui.placeholder.clone(),
        }
    }
}

/// Launch the TUI and load the dataset in the background.
///
/// The caller is responsible for initializing logging (e.g. `env_logger`)
/// before calling `run`. The dataset is loaded exactly once; the loading
/// screen is shown until it arrives.
///
/// # Errors
/// Returns an error if terminal setup or the event loop fails.
pub async fn run(loader: DatasetLoader, config: TuiConfig) -> anyhow::Result<()> {
    let mut app = App::new(config.title, config.placeholder);

    let mut terminal = setup_terminal()?;
    let (tx, rx) = mpsc::channel(256);
    let input = spawn_input_handler(tx.clone());
    spawn_load(loader, tx);

    let result = event_loop(&mut terminal, &mut app, rx).await;
    // rx is gone, so the poller returns within one poll interval.
    if input.join().is_err() {
        warn!("input handler panicked");
    }
    restore_terminal(&mut terminal)?;
    info!("tui exited");
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut rx: mpsc::Receiver<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;
        let event = rx
            .recv()
            .await
            .ok_or_else(|| anyhow!("event channel closed unexpectedly"))?;
        if handle_app_event(event, app) {
            return Ok(());
        }
    }
}

/// Dispatch a UI event and return true when the app should exit.
fn handle_app_event(event: AppEvent, app: &mut App) -> bool {
    match event {
        AppEvent::Input(key) => app.handle_key(key),
        AppEvent::Loaded(outcome) => {
            app.on_loaded(outcome);
            false
        }
        AppEvent::Click { column, row } => {
            app.handle_click(column, row);
            false
        }
        AppEvent::Scroll(delta) => {
            if delta < 0 {
                app.scroll_up(delta.unsigned_abs());
            } else {
                app.scroll_down(delta.unsigned_abs());
            }
            false
        }
    }
}

/// Spawn the one-shot dataset load.
fn spawn_load(loader: DatasetLoader, sender: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let outcome = loader.load().await;
        let _ = sender.send(AppEvent::Loaded(outcome)).await;
    });
}

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(30);
const MOUSE_SCROLL_LINES: i16 = 3;

/// Poll terminal input on a dedicated thread.
///
/// `crossterm::event::poll` blocks, so it must not run on a runtime worker.
/// The thread exits once the receiving side of `sender` is dropped.
fn spawn_input_handler(sender: mpsc::Sender<AppEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !sender.is_closed() {
            match crossterm::event::poll(INPUT_POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    debug!("input poll failed: {err}");
                    thread::sleep(INPUT_POLL_INTERVAL);
                    continue;
                }
            }
            while matches!(crossterm::event::poll(Duration::ZERO), Ok(true)) {
                let Ok(event) = crossterm::event::read() else {
                    break;
                };
                if let Some(app_event) = map_terminal_event(event)
                    && sender.blocking_send(app_event).is_err()
                {
                    return;
                }
            }
        }
        debug!("input handler stopped");
    })
}

fn map_terminal_event(event: CrosstermEvent) -> Option<AppEvent> {
    match event {
        CrosstermEvent::Key(key) => Some(AppEvent::Input(key)),
        CrosstermEvent::Mouse(mouse) => {
            let lines = if mouse.modifiers.contains(KeyModifiers::SHIFT) {
                MOUSE_SCROLL_LINES.saturating_mul(2)
            } else {
                MOUSE_SCROLL_LINES
            };
            match mouse.kind {
                MouseEventKind::ScrollUp => Some(AppEvent::Scroll(-lines)),
                MouseEventKind::ScrollDown => Some(AppEvent::Scroll(lines)),
                MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Configure terminal in raw mode with alternate screen.
fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    debug!("setting up terminal");
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal state on exit.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    debug!("restoring terminal");
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
