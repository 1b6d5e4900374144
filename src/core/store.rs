//! In-memory ordered ledger with id and auto-name allocation.

use crate::core::codec::{parse_hours_minutes, title_case};
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntryId, RawInput};
use tracing::debug;

pub const FIRST_ID: EntryId = 1;
pub const FIRST_AUTO_NAME: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<Entry>,
    next_id: EntryId,
    next_auto_name: u64,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: FIRST_ID,
            next_auto_name: FIRST_AUTO_NAME,
        }
    }
}

impl EntryStore {
    /// Rebuild a store from persisted parts.
    ///
    /// Counters below 1 are raised to 1 and the id counter is raised past
    /// the highest id present, so ids handed out later are always fresh.
    pub fn from_parts(entries: Vec<Entry>, next_id: EntryId, next_auto_name: u64) -> Self {
        let max_id = entries.iter().map(Entry::id).max().unwrap_or(0);
        let repaired = next_id.max(FIRST_ID).max(max_id.saturating_add(1));
        if repaired != next_id {
            debug!(stored = next_id, repaired, "id counter raised on load");
        }

        Self {
            entries,
            next_id: repaired,
            next_auto_name: next_auto_name.max(FIRST_AUTO_NAME),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    pub fn next_id(&self) -> EntryId {
        self.next_id
    }

    pub fn next_auto_name(&self) -> u64 {
        self.next_auto_name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Title-case the typed name, or hand out the next `Name<N>` if blank.
    fn resolve_name(&mut self, raw: &str) -> String {
        let name = title_case(raw);
        if !name.is_empty() {
            return name;
        }
        let generated = format!("Name{}", self.next_auto_name);
        self.next_auto_name = self.next_auto_name.saturating_add(1);
        generated
    }

    /// Append a new entry at the end of the ledger.
    pub fn add(&mut self, input: &RawInput, date_stamp: &str) -> Entry {
        let name = self.resolve_name(&input.name);
        let plus = parse_hours_minutes(&input.plus_hours, &input.plus_minutes);
        let minus = parse_hours_minutes(&input.minus_hours, &input.minus_minutes);

        let id = self.next_id;
        self.next_id += 1;

        let entry = Entry::new(id, name, plus, minus, Some(date_stamp.to_string()));
        debug!(id, name = entry.name(), sum = entry.sum(), "entry added");
        self.entries.push(entry.clone());
        entry
    }

    /// Recompute every editable field of an existing entry in place.
    /// Id, position and creation date are preserved.
    pub fn update(&mut self, id: EntryId, input: &RawInput) -> AppResult<Entry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or(AppError::EntryNotFound(id))?;

        let name = self.resolve_name(&input.name);
        let plus = parse_hours_minutes(&input.plus_hours, &input.plus_minutes);
        let minus = parse_hours_minutes(&input.minus_hours, &input.minus_minutes);

        let entry = &mut self.entries[idx];
        entry.overwrite(name, plus, minus);
        debug!(id, name = entry.name(), sum = entry.sum(), "entry updated");
        Ok(entry.clone())
    }

    /// Remove one entry. Unknown ids are ignored; returns whether a row went.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        before != self.entries.len()
    }

    /// Drop every entry and restart both counters.
    pub fn remove_all(&mut self) {
        self.entries.clear();
        self.next_id = FIRST_ID;
        self.next_auto_name = FIRST_AUTO_NAME;
    }

    pub fn find_by_id(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }
}
