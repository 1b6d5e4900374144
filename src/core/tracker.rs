//! The ledger controller: owns store, sort state, edit session and
//! persistence, and exposes the commands a UI calls.

use crate::core::calculator;
use crate::core::codec::to_fields;
use crate::core::sort::SortEngine;
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::models::{
    ClearOutcome, EditForm, Entry, EntryId, RawInput, SortColumn, SortState, View,
};
use crate::storage::PersistenceGateway;
use crate::utils::date::date_stamp;
use tracing::debug;

pub struct Tracker {
    store: EntryStore,
    sorter: SortEngine,
    editing: Option<EntryId>,
    gateway: PersistenceGateway,
}

impl Tracker {
    /// Load the saved ledger (or start empty) behind `gateway`.
    pub fn open(mut gateway: PersistenceGateway) -> Self {
        let loaded = gateway.load();
        Self {
            store: loaded.store,
            sorter: SortEngine::new(loaded.sort),
            editing: None,
            gateway,
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    pub fn find_by_id(&self, id: EntryId) -> Option<&Entry> {
        self.store.find_by_id(id)
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sorter.state()
    }

    /// Id of the entry currently open in the edit form.
    pub fn editing(&self) -> Option<EntryId> {
        self.editing
    }

    pub fn total(&self) -> i64 {
        calculator::total(self.store.entries())
    }

    pub fn view(&self) -> View {
        View {
            entries: self.store.entries().to_vec(),
            total: self.total(),
            sort: self.sorter.state(),
        }
    }

    fn persist(&mut self) {
        self.gateway.save(&self.store, self.sorter.state());
    }

    /// Form submit: updates the entry under edit, otherwise adds a new one.
    /// Returns `None` when the entry under edit disappeared meanwhile.
    pub fn on_add(&mut self, input: &RawInput) -> Option<Entry> {
        match self.editing {
            Some(id) => match self.update(id, input) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(id, error = %e, "update skipped");
                    None
                }
            },
            None => Some(self.add(input)),
        }
    }

    pub fn add(&mut self, input: &RawInput) -> Entry {
        let stamp = date_stamp((self.gateway.clock())());
        let entry = self.store.add(input, &stamp);
        self.persist();
        entry
    }

    /// Strict update: unknown ids come back as `AppError::EntryNotFound`.
    /// The edit session is closed either way.
    pub fn update(&mut self, id: EntryId, input: &RawInput) -> AppResult<Entry> {
        self.editing = None;
        let entry = self.store.update(id, input)?;
        self.persist();
        Ok(entry)
    }

    /// Open an edit session and return the prefilled form.
    pub fn begin_edit(&mut self, id: EntryId) -> Option<EditForm> {
        let entry = self.store.find_by_id(id)?;
        let (plus_hours, plus_minutes) = to_fields(entry.plus_minutes());
        let (minus_hours, minus_minutes) = to_fields(entry.minus_minutes());
        let form = EditForm {
            name: entry.name().to_string(),
            plus_hours,
            plus_minutes,
            minus_hours,
            minus_minutes,
        };
        self.editing = Some(id);
        Some(form)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn on_sort(&mut self, column: SortColumn) -> SortState {
        let state = self.sorter.sort(&mut self.store, column);
        self.persist();
        state
    }

    /// Remove one entry; unknown ids are a no-op. Deleting the entry under
    /// edit also closes the edit session.
    pub fn on_delete(&mut self, id: EntryId) -> bool {
        if !self.store.remove(id) {
            return false;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.persist();
        true
    }

    /// Clear the ledger after asking `confirm`. An empty ledger is refused
    /// before asking, and nothing is written in that case.
    pub fn on_delete_all(&mut self, confirm: impl FnOnce() -> bool) -> ClearOutcome {
        if self.store.is_empty() {
            return ClearOutcome::NothingToDelete;
        }
        if !confirm() {
            return ClearOutcome::Cancelled;
        }

        self.store.remove_all();
        self.sorter.clear();
        self.editing = None;
        self.persist();
        ClearOutcome::Cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::SortDirection;
    use crate::storage::{DEFAULT_SLOT, MemoryStore};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
    }

    fn tracker(mem: &MemoryStore) -> Tracker {
        Tracker::open(PersistenceGateway::new(Box::new(mem.clone()), DEFAULT_SLOT, day))
    }

    #[test]
    fn submit_adds_then_updates_under_edit() {
        let mem = MemoryStore::new();
        let mut t = tracker(&mem);

        let bob = t.on_add(&RawInput::new("bob", "1", "", "", "30")).unwrap();
        assert_eq!(bob.date_added(), Some("03.11"));
        assert_eq!(bob.sum(), 30);

        let form = t.begin_edit(bob.id()).unwrap();
        assert_eq!(form.plus_hours, "1");
        assert_eq!(form.minus_minutes, "30");
        assert_eq!(t.editing(), Some(bob.id()));

        let mut edited = RawInput::from(form);
        edited.plus_minutes = "15".into();
        let updated = t.on_add(&edited).unwrap();
        assert_eq!(updated.id(), bob.id());
        assert_eq!(updated.sum(), 45);
        assert_eq!(t.editing(), None);
        assert_eq!(t.entries().len(), 1);
    }

    #[test]
    fn submit_for_vanished_entry_is_a_silent_noop() {
        let mem = MemoryStore::new();
        let mut t = tracker(&mem);
        let a = t.add(&RawInput::new("a", "", "", "", ""));
        t.begin_edit(a.id()).unwrap();
        // remove behind the edit session's back, straight on the store
        t.store.remove(a.id());

        assert_eq!(t.on_add(&RawInput::new("x", "", "", "", "")), None);
        assert_eq!(t.editing(), None);
        assert!(t.entries().is_empty());
        assert!(matches!(
            t.update(a.id(), &RawInput::default()),
            Err(AppError::EntryNotFound(_))
        ));
    }

    #[test]
    fn delete_closes_matching_edit_session() {
        let mem = MemoryStore::new();
        let mut t = tracker(&mem);
        let a = t.add(&RawInput::new("a", "", "", "", ""));
        t.begin_edit(a.id());
        assert!(t.on_delete(a.id()));
        assert_eq!(t.editing(), None);
        assert!(!t.on_delete(a.id()));
    }

    #[test]
    fn delete_all_guard_and_reset() {
        let mem = MemoryStore::new();
        let mut t = tracker(&mem);

        let mut asked = false;
        assert_eq!(
            t.on_delete_all(|| {
                asked = true;
                true
            }),
            ClearOutcome::NothingToDelete
        );
        assert!(!asked);
        assert_eq!(mem.writes(), 0);

        t.add(&RawInput::new("", "1", "", "", ""));
        t.add(&RawInput::new("", "", "", "1", ""));
        t.on_sort(SortColumn::Sum);
        assert_eq!(t.on_delete_all(|| false), ClearOutcome::Cancelled);
        assert_eq!(t.entries().len(), 2);

        t.begin_edit(1);
        assert_eq!(t.on_delete_all(|| true), ClearOutcome::Cleared);
        assert!(t.entries().is_empty());
        assert_eq!(t.sort_state(), None);
        assert_eq!(t.editing(), None);

        let fresh = t.add(&RawInput::default());
        assert_eq!(fresh.id(), 1);
        assert_eq!(fresh.name(), "Name1");
    }

    #[test]
    fn cancelled_edit_makes_submit_add() {
        let mem = MemoryStore::new();
        let mut t = tracker(&mem);
        let bob = t.add(&RawInput::new("bob", "1", "", "", ""));

        let form = t.begin_edit(bob.id()).unwrap();
        t.cancel_edit();
        assert_eq!(t.editing(), None);

        let added = t.on_add(&RawInput::from(form)).unwrap();
        assert_ne!(added.id(), bob.id());
        assert_eq!(t.entries().len(), 2);
        assert_eq!(t.find_by_id(bob.id()), Some(&bob));
    }

    #[test]
    fn untouched_edit_keeps_oversized_saved_value() {
        let mem = MemoryStore::new();
        mem.put_raw(
            DEFAULT_SLOT,
            r#"{"people":[{"id":1,"name":"Big","plusHours":20000,"plusMinutes":20000,"dateAdded":"01.01"}]}"#,
        );
        let mut t = tracker(&mem);
        let before = t.find_by_id(1).unwrap().plus_minutes();

        let form = t.begin_edit(1).unwrap();
        let after = t.on_add(&RawInput::from(form)).unwrap();
        assert_eq!(after.plus_minutes(), before);
        assert_eq!(before, 9999 * 60 + 9999);
    }

    #[test]
    fn state_survives_reopen() {
        let mem = MemoryStore::new();
        {
            let mut t = tracker(&mem);
            t.add(&RawInput::new("c", "", "30", "", ""));
            t.add(&RawInput::new("a", "", "", "", "10"));
            t.add(&RawInput::new("b", "", "", "", ""));
            t.on_sort(SortColumn::Sum);
        }

        let mut t = tracker(&mem);
        let sums: Vec<i64> = t.entries().iter().map(Entry::sum).collect();
        assert_eq!(sums, vec![-10, 0, 30]);

        // the toggle continues from the saved state
        let st = t.on_sort(SortColumn::Sum);
        assert_eq!(st.direction, SortDirection::Desc);
        let view = t.view();
        assert_eq!(view.total, 20);
        assert_eq!(view.entries.iter().map(Entry::sum).collect::<Vec<_>>(), vec![30, 0, -10]);
    }

    #[test]
    fn persistence_failure_keeps_memory_state() {
        let mem = MemoryStore::new();
        mem.set_fail_writes(true);
        let mut t = tracker(&mem);
        let e = t.add(&RawInput::new("bob", "2", "", "", ""));
        assert_eq!(t.find_by_id(e.id()).map(Entry::sum), Some(120));
        assert_eq!(mem.raw(DEFAULT_SLOT), None);
    }
}
