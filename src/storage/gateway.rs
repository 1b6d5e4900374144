//! Best-effort persistence of the ledger into one key-value slot.

use super::KeyValueStore;
use super::slot::{SlotData, StoredEntry};
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::models::{Entry, EntryId, SortState};
use crate::utils::date::{Clock, date_stamp};
use tracing::{debug, info, warn};

/// What a load hands back to the controller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub store: EntryStore,
    pub sort: Option<SortState>,
}

pub struct PersistenceGateway {
    backend: Box<dyn KeyValueStore>,
    slot: String,
    clock: Clock,
}

impl PersistenceGateway {
    pub fn new(backend: Box<dyn KeyValueStore>, slot: impl Into<String>, clock: Clock) -> Self {
        Self {
            backend,
            slot: slot.into(),
            clock,
        }
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Serialize and write the slot. Failures are logged and swallowed.
    pub fn save(&mut self, store: &EntryStore, sort: Option<SortState>) {
        if let Err(e) = self.try_save(store, sort) {
            warn!(slot = %self.slot, error = %e, "could not persist ledger, keeping in-memory state");
        }
    }

    pub fn try_save(&mut self, store: &EntryStore, sort: Option<SortState>) -> AppResult<()> {
        let mut data = SlotData {
            people: Some(store.entries().iter().map(StoredEntry::from).collect()),
            person_id_counter: Some(store.next_id()),
            auto_name_counter: Some(store.next_auto_name()),
            ..SlotData::default()
        };
        data.set_sort_state(sort);

        let json = serde_json::to_string(&data)?;
        self.backend.set(&self.slot, &json)?;
        debug!(slot = %self.slot, entries = store.len(), "ledger saved");
        Ok(())
    }

    /// Read the slot. Missing or unreadable data yields an empty ledger.
    ///
    /// Entries saved before creation dates existed get today's stamp and the
    /// slot is rewritten right away.
    pub fn load(&mut self) -> Loaded {
        let raw = match self.backend.get(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(slot = %self.slot, "no saved ledger, starting empty");
                return Loaded::default();
            }
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "could not read saved ledger, starting empty");
                return Loaded::default();
            }
        };

        let data: SlotData = match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "saved ledger is malformed, starting empty");
                return Loaded::default();
            }
        };

        // an id at the top of the range leaves `add` nothing to hand out
        let exhausted = data.person_id_counter == Some(EntryId::MAX)
            || data.people.iter().flatten().any(|p| p.id == EntryId::MAX);
        if exhausted {
            warn!(slot = %self.slot, "saved ledger has no ids left, starting empty");
            return Loaded::default();
        }

        let sort = data.sort_state();
        let stamp = date_stamp((self.clock)());
        let mut migrated = 0usize;
        let entries: Vec<Entry> = data
            .people
            .unwrap_or_default()
            .into_iter()
            .map(|stored| {
                let mut entry = Entry::from(stored);
                if entry.stamp_if_missing(&stamp) {
                    migrated += 1;
                }
                entry
            })
            .collect();

        let store = EntryStore::from_parts(
            entries,
            data.person_id_counter.unwrap_or(0),
            data.auto_name_counter.unwrap_or(0),
        );

        if migrated > 0 {
            info!(slot = %self.slot, migrated, "stamped entries missing a creation date");
            self.save(&store, sort);
        }

        debug!(slot = %self.slot, entries = store.len(), "ledger loaded");
        Loaded { store, sort }
    }
}
