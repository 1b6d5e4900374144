//! Persisted layout of the ledger slot.
//!
//! ```json
//! { "people": [...], "personIdCounter": 3, "autoNameCounter": 2,
//!   "sortColumn": "sum", "sortDirection": "desc" }
//! ```
//!
//! Entries keep the hour/minute split (`minus*` fields hold magnitudes) plus
//! convenience totals. Totals are written for readers of the raw JSON but
//! recomputed from the hour/minute fields when loading.

use crate::core::codec::from_fields;
use crate::models::{Entry, EntryId, SortColumn, SortDirection, SortState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEntry {
    pub id: EntryId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub plus_hours: i64,
    #[serde(default)]
    pub plus_minutes: i64,
    #[serde(default)]
    pub minus_hours: i64,
    #[serde(default)]
    pub minus_minutes: i64,
    #[serde(default)]
    pub total_plus: i64,
    #[serde(default)]
    pub total_minus: i64,
    #[serde(default)]
    pub sum: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

impl From<&Entry> for StoredEntry {
    fn from(e: &Entry) -> Self {
        let plus = e.plus_minutes();
        let minus = e.minus_minutes().abs();
        Self {
            id: e.id(),
            name: e.name().to_string(),
            plus_hours: plus / 60,
            plus_minutes: plus % 60,
            minus_hours: minus / 60,
            minus_minutes: minus % 60,
            total_plus: e.plus_minutes(),
            total_minus: e.minus_minutes(),
            sum: e.sum(),
            date_added: e.date_added().map(str::to_string),
        }
    }
}

impl From<StoredEntry> for Entry {
    fn from(s: StoredEntry) -> Self {
        let plus = from_fields(s.plus_hours, s.plus_minutes);
        let minus = from_fields(s.minus_hours, s.minus_minutes);
        // blank dates count as missing so they get migrated
        let date_added = s.date_added.filter(|d| !d.trim().is_empty());
        Entry::new(s.id, s.name, plus, minus, date_added)
    }
}

/// The whole slot. Every key is optional on read; `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotData {
    #[serde(default)]
    pub people: Option<Vec<StoredEntry>>,
    #[serde(default)]
    pub person_id_counter: Option<EntryId>,
    #[serde(default)]
    pub auto_name_counter: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<String>,
}

impl SlotData {
    /// Unknown column names mean no active sort; they never fail the load.
    pub fn sort_state(&self) -> Option<SortState> {
        let column = SortColumn::from_code(self.sort_column.as_deref()?)?;
        let direction = self
            .sort_direction
            .as_deref()
            .and_then(SortDirection::from_code)
            .unwrap_or_default();
        Some(SortState { column, direction })
    }

    pub fn set_sort_state(&mut self, sort: Option<SortState>) {
        self.sort_column = sort.map(|s| s.column.as_str().to_string());
        self.sort_direction = sort.map(|s| s.direction.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_legacy_slot_without_dates_or_sort() {
        let json = r#"{
            "people": [{
                "id": 1, "name": "Bob",
                "plusHours": 1, "plusMinutes": 90,
                "minusHours": 0, "minusMinutes": 15,
                "totalPlus": 150, "totalMinus": -15, "sum": 135
            }],
            "personIdCounter": 2,
            "autoNameCounter": 1
        }"#;
        let slot: SlotData = serde_json::from_str(json).unwrap();
        assert_eq!(slot.sort_state(), None);

        let people = slot.people.unwrap();
        let entry: Entry = people[0].clone().into();
        assert_eq!(entry.plus_minutes(), 150);
        assert_eq!(entry.minus_minutes(), -15);
        assert_eq!(entry.date_added(), None);
    }

    #[test]
    fn totals_are_recomputed_not_trusted() {
        let json = r#"{"id": 4, "name": "X", "plusHours": 2, "sum": 9999, "totalPlus": 1}"#;
        let stored: StoredEntry = serde_json::from_str(json).unwrap();
        let entry: Entry = stored.into();
        assert_eq!(entry.sum(), 120);
    }

    #[test]
    fn stored_fields_are_capped_like_typed_ones() {
        let json = r#"{"id": 1, "plusHours": 9223372036854775807, "plusMinutes": 20000,
                       "minusHours": -3, "minusMinutes": -9223372036854775808}"#;
        let stored: StoredEntry = serde_json::from_str(json).unwrap();
        let entry: Entry = stored.into();
        assert_eq!(entry.plus_minutes(), 9999 * 60 + 9999);
        assert_eq!(entry.minus_minutes(), -(3 * 60 + 9999));
    }

    #[test]
    fn unknown_sort_column_is_ignored() {
        let json = r#"{"people": [], "sortColumn": "date", "sortDirection": "desc"}"#;
        let slot: SlotData = serde_json::from_str(json).unwrap();
        assert_eq!(slot.sort_state(), None);

        let json = r#"{"sortColumn": "SUM", "sortDirection": "sideways"}"#;
        let slot: SlotData = serde_json::from_str(json).unwrap();
        assert_eq!(
            slot.sort_state(),
            Some(SortState { column: SortColumn::Sum, direction: SortDirection::Asc })
        );
    }

    #[test]
    fn nulls_read_as_absent() {
        let json = r#"{"people": null, "personIdCounter": null}"#;
        let slot: SlotData = serde_json::from_str(json).unwrap();
        assert_eq!(slot.people, None);
        assert_eq!(slot.person_id_counter, None);
        assert_eq!(slot.auto_name_counter, None);
    }

    #[test]
    fn writes_camel_case_layout() {
        let entry = Entry::new(3, "Ann", 75, 30, Some("01.02".into()));
        let stored = StoredEntry::from(&entry);
        let v = serde_json::to_value(&stored).unwrap();
        assert_eq!(v["plusHours"], 1);
        assert_eq!(v["plusMinutes"], 15);
        assert_eq!(v["minusMinutes"], 30);
        assert_eq!(v["totalMinus"], -30);
        assert_eq!(v["sum"], 45);
        assert_eq!(v["dateAdded"], "01.02");
    }
}
