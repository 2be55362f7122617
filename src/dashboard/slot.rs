use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::models::Result;

/// Identifies one search against a [`SearchSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<T> {
    /// The result became the visible state.
    Applied(T),
    /// A newer search started before this one finished; the result was dropped.
    Superseded,
}

impl<T> SearchOutcome<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            SearchOutcome::Applied(value) => Some(value),
            SearchOutcome::Superseded => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, SearchOutcome::Superseded)
    }
}

/// Visible state for one platform, guarded by a generation counter.
///
/// Every search takes a ticket from [`begin`](Self::begin). Only the holder of
/// the latest ticket may change the state, so a slow response for an older
/// search can never overwrite a newer one. A failed current search clears the
/// state.
#[derive(Debug)]
pub struct SearchSlot<T> {
    generation: AtomicU64,
    state: RwLock<Option<T>>,
}

impl<T: Clone> SearchSlot<T> {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            state: RwLock::new(None),
        }
    }

    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub fn complete(&self, ticket: SearchTicket, result: Result<T>) -> Result<SearchOutcome<T>> {
        let mut state = self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner());

        if !self.is_current(ticket) {
            return Ok(SearchOutcome::Superseded);
        }

        match result {
            Ok(value) => {
                *state = Some(value.clone());
                Ok(SearchOutcome::Applied(value))
            }
            Err(e) => {
                *state = None;
                Err(e)
            }
        }
    }

    pub fn snapshot(&self) -> Option<T> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl<T: Clone> Default for SearchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
