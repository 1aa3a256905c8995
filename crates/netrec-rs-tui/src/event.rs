//! TUI event types for input and loader messages.

use crossterm::event::KeyEvent;
use netrec_rs_core::LoadOutcome;

/// Application event emitted by the input handler or the load task.
#[derive(Debug)]
pub enum AppEvent {
    /// Keyboard input event.
    Input(KeyEvent),
    /// The one-shot dataset load finished.
    Loaded(LoadOutcome),
    /// Left mouse button pressed at a terminal cell.
    Click { column: u16, row: u16 },
    /// Scroll event in the results view.
    Scroll(i16),
}
