use super::entry::Entry;
use super::sort::SortState;

/// What the UI needs after every command: rows, grand total and the sort
/// indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub entries: Vec<Entry>,
    pub total: i64,
    pub sort: Option<SortState>,
}

/// Prefilled edit form. Values are magnitudes without sign, zero parts are
/// left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub name: String,
    pub plus_hours: String,
    pub plus_minutes: String,
    pub minus_hours: String,
    pub minus_minutes: String,
}

/// Raw strings captured from the form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub name: String,
    pub plus_hours: String,
    pub plus_minutes: String,
    pub minus_hours: String,
    pub minus_minutes: String,
}

impl RawInput {
    pub fn new(
        name: impl Into<String>,
        plus_hours: impl Into<String>,
        plus_minutes: impl Into<String>,
        minus_hours: impl Into<String>,
        minus_minutes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            plus_hours: plus_hours.into(),
            plus_minutes: plus_minutes.into(),
            minus_hours: minus_hours.into(),
            minus_minutes: minus_minutes.into(),
        }
    }
}

impl From<EditForm> for RawInput {
    fn from(f: EditForm) -> Self {
        Self {
            name: f.name,
            plus_hours: f.plus_hours,
            plus_minutes: f.plus_minutes,
            minus_hours: f.minus_hours,
            minus_minutes: f.minus_minutes,
        }
    }
}

/// Result of a clear-all request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    NothingToDelete,
    Cancelled,
}
