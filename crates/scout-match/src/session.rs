//! Session-scoped search state.

use crate::pipeline::SearchOutcome;

/// Explicit holder for the results of the most recent search.
///
/// Created once at session start and passed by reference into whatever
/// drives the pipeline; cleared on explicit reset. This replaces ambient
/// globals: nothing else in the crate remembers past runs.
#[derive(Debug, Default)]
pub struct SearchSession {
    last_outcome: Option<SearchOutcome>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the outcome of a run, returning a reference to it.
    pub fn store(&mut self, outcome: SearchOutcome) -> &SearchOutcome {
        self.last_outcome.insert(outcome)
    }

    /// The most recent outcome, if a search has run this session.
    pub fn last(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Drop any stored results.
    pub fn clear(&mut self) {
        self.last_outcome = None;
    }
}
