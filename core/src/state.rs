//! View-state exposed to renderers.
//!
//! # Design
//! `ViewState` is a tagged union so "loading", "ready" and "failed" cannot
//! hold at the same time. `ListView` owns one state per view instance and
//! enforces its lifecycle: `activate` starts a fetch in `Loading`, and
//! exactly one `settle` for that activation moves it to `Ready` or `Failed`.
//! A settle for an older activation, or a second settle, is ignored.

use crate::error::FetchError;
use crate::resource::ResourceKind;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Loaded items; empty unless `Ready`.
    pub fn items(&self) -> &[T] {
        match self {
            ViewState::Ready(items) => items,
            ViewState::Loading | ViewState::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            ViewState::Loading | ViewState::Ready(_) => None,
        }
    }

    /// `Ready` with no rows, the renderer's "no records" case.
    pub fn is_empty_ready(&self) -> bool {
        matches!(self, ViewState::Ready(items) if items.is_empty())
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> From<Result<Vec<T>, FetchError>> for ViewState<T> {
    fn from(outcome: Result<Vec<T>, FetchError>) -> Self {
        match outcome {
            Ok(items) => ViewState::Ready(items),
            Err(e) => ViewState::Failed(e.to_string()),
        }
    }
}

/// Ticket identifying one activation of a `ListView`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation(u64);

/// A single list view: one resource, one state, one fetch per activation.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    kind: ResourceKind,
    state: ViewState<T>,
    generation: u64,
}

impl<T> ListView<T> {
    /// A fresh view starts in `Loading`; call `activate` to obtain the ticket
    /// for its first fetch.
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            state: ViewState::Loading,
            generation: 0,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn activate(&mut self) -> Activation {
        self.generation += 1;
        self.state = ViewState::Loading;
        Activation(self.generation)
    }

    /// Apply the outcome of the fetch started by `activation`. Returns
    /// `false` and leaves the state untouched if the activation is stale or
    /// already settled.
    pub fn settle(&mut self, activation: Activation, outcome: Result<Vec<T>, FetchError>) -> bool {
        if activation.0 != self.generation || !self.state.is_loading() {
            tracing::debug!(resource = %self.kind, "ignoring inert settle");
            return false;
        }
        self.state = ViewState::from(outcome);
        true
    }

    pub fn empty_message(&self) -> &'static str {
        self.kind.empty_message()
    }
}
