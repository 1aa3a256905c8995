//! Application state for the lookup TUI.

use crate::state::{SessionEvent, SessionState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use netrec_rs_core::LoadOutcome;
use ratatui::layout::{Position, Rect};
use std::cmp::min;

const PAGE_LINES: u16 = 5;

/// Top-level application state for the TUI.
pub struct App {
    /// Session snapshot driven by the reducer.
    pub state: SessionState,
    /// Header title.
    pub title: String,
    /// Placeholder shown in the empty input box.
    pub placeholder: String,
    /// Status line text.
    pub status: String,
    /// Current scroll offset of the results view.
    pub scroll: u16,
    /// Maximum scroll offset of the results view.
    pub max_scroll: u16,
    /// Screen area of the Find button from the last draw.
    pub find_button: Rect,
}

impl App {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            state: SessionState::default(),
            title: title.into(),
            placeholder: placeholder.into(),
            status: "loading".to_string(),
            scroll: 0,
            max_scroll: 0,
            find_button: Rect::default(),
        }
    }

    fn apply(&mut self, event: SessionEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(event);
    }

    /// Store the loaded dataset and leave the loading phase.
    pub fn on_loaded(&mut self, outcome: LoadOutcome) {
        info!(
            "session ready (source={}, records={}, fallback={})",
            outcome.source,
            outcome.dataset.len(),
            outcome.is_fallback()
        );
        self.status = if outcome.is_fallback() {
            "sample data".to_string()
        } else {
            "ready".to_string()
        };
        self.apply(SessionEvent::Loaded(outcome));
    }

    /// Handle a key press and return true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        if key.code == KeyCode::Esc {
            return true;
        }
        if self.state.is_loading() {
            return false;
        }

        match key.code {
            KeyCode::Enter => self.search(),
            KeyCode::Backspace => {
                let mut query = self.state.query.clone();
                query.pop();
                self.apply(SessionEvent::QueryChanged(query));
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut query = self.state.query.clone();
                query.push(ch);
                self.apply(SessionEvent::QueryChanged(query));
            }
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE_LINES),
            KeyCode::PageDown => self.scroll_down(PAGE_LINES),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll,
            _ => {}
        }
        false
    }

    /// Handle a left click; only the Find button reacts.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if self.state.is_loading() {
            return;
        }
        if self.find_button.contains(Position::new(column, row)) {
            debug!("find button clicked");
            self.search();
        }
    }

    /// Run the current query through the reducer.
    pub fn search(&mut self) {
        self.apply(SessionEvent::SearchRequested);
        self.scroll = 0;
        self.max_scroll = 0;
    }

    /// Scroll the results view upward by a number of lines.
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Scroll the results view downward by a number of lines.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = min(self.scroll.saturating_add(lines), self.max_scroll);
    }

    /// Update scroll bounds after layout changes.
    pub fn update_scroll_bounds(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.scroll = self.scroll.min(max_scroll);
    }
}
