//! Session state and its reducer.
//!
//! The whole session is one immutable snapshot; every user or loader event
//! produces the next snapshot through [`SessionState::reduce`].

use log::debug;
use netrec_rs_core::lookup::NO_MATCH_MESSAGE;
use netrec_rs_core::{Dataset, DatasetOrigin, LoadOutcome, RecommendationResult};
use std::sync::Arc;

/// Lifecycle of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The dataset load is still in flight.
    Loading,
    /// A dataset is available (primary or fallback).
    Ready,
}

/// Inputs to the reducer.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Loaded(LoadOutcome),
    QueryChanged(String),
    SearchRequested,
}

/// What the result panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Nothing searched yet, an empty query, or the query changed since.
    Hidden,
    Matched(&'a RecommendationResult),
    NoMatch,
}

impl SearchOutcome<'_> {
    /// Informational text for [`SearchOutcome::NoMatch`].
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoMatch => Some(NO_MATCH_MESSAGE),
            _ => None,
        }
    }
}

/// Snapshot of one interactive session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: Phase,
    pub dataset: Arc<Dataset>,
    pub origin: Option<DatasetOrigin>,
    pub advisory: Option<String>,
    /// Description of the configured source, known once loaded.
    pub source: Option<String>,
    pub query: String,
    pub result: Option<RecommendationResult>,
    pub search_performed: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            dataset: Arc::new(Dataset::default()),
            origin: None,
            advisory: None,
            source: None,
            query: String::new(),
            result: None,
            search_performed: false,
        }
    }
}

impl SessionState {
    /// Apply one event and return the next snapshot.
    pub fn reduce(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::Loaded(outcome) => Self {
                phase: Phase::Ready,
                dataset: outcome.dataset,
                origin: Some(outcome.origin),
                advisory: outcome.advisory,
                source: Some(outcome.source),
                ..self
            },
            SessionEvent::QueryChanged(query) => Self {
                query,
                search_performed: false,
                ..self
            },
            SessionEvent::SearchRequested => {
                if self.query.trim().is_empty() {
                    return Self {
                        result: None,
                        search_performed: false,
                        ..self
                    };
                }
                let result = RecommendationResult::search(&self.dataset, &self.query);
                debug!(
                    "search performed (query={:?}, matched={})",
                    self.query.trim(),
                    result.is_some()
                );
                Self {
                    result,
                    search_performed: true,
                    ..self
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Derive what the result panel should display.
    pub fn outcome(&self) -> SearchOutcome<'_> {
        if !self.search_performed {
            return SearchOutcome::Hidden;
        }
        match &self.result {
            Some(result) => SearchOutcome::Matched(result),
            None => SearchOutcome::NoMatch,
        }
    }
}
