//! Column ordering with asc/desc toggling.

use crate::core::store::EntryStore;
use crate::models::{Entry, SortColumn, SortDirection, SortState};
use std::cmp::Ordering;

/// Remembers the active column/direction between requests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortEngine {
    state: Option<SortState>,
}

impl SortEngine {
    pub fn new(state: Option<SortState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> Option<SortState> {
        self.state
    }

    pub fn clear(&mut self) {
        self.state = None;
    }

    /// Same column twice flips the direction; a new column starts ascending.
    pub fn next_state(&self, column: SortColumn) -> SortState {
        let direction = match self.state {
            Some(s) if s.column == column => s.direction.toggled(),
            _ => SortDirection::Asc,
        };
        SortState { column, direction }
    }

    /// Re-sort the whole ledger by `column` and remember the new state.
    pub fn sort(&mut self, store: &mut EntryStore, column: SortColumn) -> SortState {
        let next = self.next_state(column);
        sort_entries(store.entries_mut(), next);
        self.state = Some(next);
        next
    }
}

/// Ascending comparison of two entries on one column.
pub fn compare(a: &Entry, b: &Entry, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortColumn::Plus => a.plus_minutes().cmp(&b.plus_minutes()),
        SortColumn::Minus => a.minus_minutes().cmp(&b.minus_minutes()),
        SortColumn::Sum => a.sum().cmp(&b.sum()),
    }
}

/// Stable sort: ties keep their current relative order in both directions.
pub fn sort_entries(entries: &mut [Entry], state: SortState) {
    entries.sort_by(|a, b| {
        let ord = compare(a, b, state.column);
        match state.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}
