//! Grand total and per-column footers.

use crate::models::Entry;

/// Column totals for the table footer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub plus: i64,
    pub minus: i64,
}

/// Sum of every entry's signed sum.
pub fn total(entries: &[Entry]) -> i64 {
    entries.iter().map(Entry::sum).sum()
}

pub fn totals(entries: &[Entry]) -> Totals {
    entries.iter().fold(Totals::default(), |acc, e| Totals {
        plus: acc.plus + e.plus_minutes(),
        minus: acc.minus + e.minus_minutes(),
    })
}
