pub type EntryId = u64;

/// One row of the ledger.
///
/// `plus_minutes` is never negative and `minus_minutes` is never positive;
/// the constructor enforces both, so `sum()` is always `plus + minus`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    name: String,
    plus_minutes: i64,
    minus_minutes: i64,
    date_added: Option<String>,
}

impl Entry {
    /// Build an entry from magnitudes. The sign of `minus` is ignored and
    /// re-applied as a deduction.
    pub fn new(
        id: EntryId,
        name: impl Into<String>,
        plus: i64,
        minus: i64,
        date_added: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            plus_minutes: plus.saturating_abs(),
            minus_minutes: minus.saturating_abs().saturating_neg(),
            date_added,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plus_minutes(&self) -> i64 {
        self.plus_minutes
    }

    /// Non-positive deduction.
    pub fn minus_minutes(&self) -> i64 {
        self.minus_minutes
    }

    pub fn sum(&self) -> i64 {
        self.plus_minutes + self.minus_minutes
    }

    pub fn date_added(&self) -> Option<&str> {
        self.date_added.as_deref()
    }

    /// Stamp the creation date if the entry has none yet.
    /// Returns true when the stamp was applied.
    pub fn stamp_if_missing(&mut self, stamp: &str) -> bool {
        if self.date_added.is_some() {
            return false;
        }
        self.date_added = Some(stamp.to_string());
        true
    }

    /// Replace every editable field; id and creation date stay untouched.
    pub(crate) fn overwrite(&mut self, name: String, plus: i64, minus: i64) {
        self.name = name;
        self.plus_minutes = plus.saturating_abs();
        self.minus_minutes = minus.saturating_abs().saturating_neg();
    }
}
