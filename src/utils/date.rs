use chrono::NaiveDate;

/// Source of "today", swappable in tests.
pub type Clock = fn() -> NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Day stamp shown next to an entry name, `DD.MM`.
pub fn date_stamp(d: NaiveDate) -> String {
    d.format("%d.%m").to_string()
}
