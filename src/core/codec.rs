//! Value codec: raw form fields ⇄ signed minutes ⇄ display strings.
//!
//! Input convention: every value is typed as two integer fields, hours and
//! minutes, combined as `hours * 60 + minutes`. Anything that is not an
//! ASCII digit is dropped before parsing (so `1,5` and `1.5` both read as
//! `15`), an empty field counts as zero and each field is capped at
//! [`FIELD_MAX`].

use regex::Regex;
use std::sync::LazyLock;

/// Upper bound for a single hours or minutes field.
pub const FIELD_MAX: i64 = 9999;

static DISPLAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)(?:(\d+)t)?\s*(?:(\d+)min)?$").expect("display pattern is valid")
});

/// Parse one raw field into a non-negative integer in `0..=FIELD_MAX`.
pub fn parse_field(raw: &str) -> i64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let significant = digits.trim_start_matches('0');

    if significant.is_empty() {
        return 0;
    }
    // Longer runs would overflow before they could be clamped.
    if significant.len() > 4 {
        return FIELD_MAX;
    }

    significant
        .parse::<i64>()
        .map(|v| v.min(FIELD_MAX))
        .unwrap_or(0)
}

/// Combine an hours field and a minutes field into total minutes (≥ 0).
pub fn parse_hours_minutes(hours_raw: &str, minutes_raw: &str) -> i64 {
    parse_field(hours_raw) * 60 + parse_field(minutes_raw)
}

/// Combine already-numeric hour and minute fields, e.g. from a saved slot.
/// Signs are dropped and each field is capped at [`FIELD_MAX`] like typed input.
pub fn from_fields(hours: i64, minutes: i64) -> i64 {
    let clamp = |v: i64| v.unsigned_abs().min(FIELD_MAX as u64) as i64;
    clamp(hours) * 60 + clamp(minutes)
}

/// Split a value back into edit-form fields.
///
/// The sign is dropped: the form always shows magnitudes and the caller
/// knows which side (plus or minus) the value belongs to. Hours are capped at
/// [`FIELD_MAX`] and the remainder goes to the minutes field so that every
/// value the form can produce parses back to itself. Zero parts are empty.
pub fn to_fields(minutes: i64) -> (String, String) {
    let magnitude = minutes.saturating_abs();
    let hours = (magnitude / 60).min(FIELD_MAX);
    let rest = magnitude - hours * 60;

    let show = |v: i64| if v == 0 { String::new() } else { v.to_string() };
    (show(hours), show(rest))
}

/// Human-readable value, e.g. `+1t 30min`, `-45min`, `2t`, `0`.
///
/// Negative values always carry `-`; `want_sign` adds `+` to positive ones.
pub fn format_minutes(minutes: i64, want_sign: bool) -> String {
    if minutes == 0 {
        return "0".to_string();
    }

    let abs_m = minutes.abs();
    let hours = abs_m / 60;
    let mins = abs_m % 60;

    let sign = if minutes < 0 {
        "-"
    } else if want_sign {
        "+"
    } else {
        ""
    };

    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(format!("{hours}t"));
    }
    if mins > 0 {
        parts.push(format!("{mins}min"));
    }

    format!("{sign}{}", parts.join(" "))
}

/// Inverse of [`format_minutes`]. Returns `None` for text it could not have
/// produced.
pub fn parse_display(s: &str) -> Option<i64> {
    let s = s.trim();
    if s == "0" {
        return Some(0);
    }

    let caps = DISPLAY_RE.captures(s)?;
    let hours = caps.get(2).map(|m| m.as_str().parse::<i64>()).transpose().ok()?;
    let mins = caps.get(3).map(|m| m.as_str().parse::<i64>()).transpose().ok()?;
    if hours.is_none() && mins.is_none() {
        return None;
    }

    let total = hours.unwrap_or(0) * 60 + mins.unwrap_or(0);
    if &caps[1] == "-" { Some(-total) } else { Some(total) }
}

/// Title-case a user-typed name: whitespace runs collapse to one space and
/// each word starts with an upper-case letter, the rest lower-case.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_strips_and_clamps() {
        assert_eq!(parse_field(""), 0);
        assert_eq!(parse_field("abc"), 0);
        assert_eq!(parse_field(" 45 "), 45);
        assert_eq!(parse_field("1,5"), 15);
        assert_eq!(parse_field("1.5"), 15);
        assert_eq!(parse_field("-30"), 30);
        assert_eq!(parse_field("0007"), 7);
        assert_eq!(parse_field("10000"), FIELD_MAX);
        assert_eq!(parse_field("99999999999999999999999"), FIELD_MAX);
    }

    #[test]
    fn hours_and_minutes_combine() {
        assert_eq!(parse_hours_minutes("1", "30"), 90);
        assert_eq!(parse_hours_minutes("", "90"), 90);
        assert_eq!(parse_hours_minutes("2", ""), 120);
        assert_eq!(parse_hours_minutes("x", "y"), 0);
    }

    #[test]
    fn numeric_fields_are_capped() {
        assert_eq!(from_fields(1, 30), 90);
        assert_eq!(from_fields(-2, -5), 125);
        assert_eq!(from_fields(i64::MAX, i64::MIN), FIELD_MAX * 60 + FIELD_MAX);

        let max = from_fields(20000, 0);
        let (h, m) = to_fields(max);
        assert_eq!(parse_hours_minutes(&h, &m), max);
    }

    #[test]
    fn to_fields_drops_sign_and_blanks_zero() {
        assert_eq!(to_fields(90), ("1".to_string(), "30".to_string()));
        assert_eq!(to_fields(-45), (String::new(), "45".to_string()));
        assert_eq!(to_fields(120), ("2".to_string(), String::new()));
        assert_eq!(to_fields(0), (String::new(), String::new()));
    }

    #[test]
    fn edit_fields_round_trip() {
        let raws = [
            ("", ""),
            ("1", "30"),
            ("0", "90"),
            ("12", "0"),
            ("abc", "7"),
            ("9999", "9999"),
            ("123456", "123456"),
            ("4,5", "1.0"),
        ];
        for (h, m) in raws {
            let v = parse_hours_minutes(h, m);
            let (fh, fm) = to_fields(v);
            assert_eq!(parse_hours_minutes(&fh, &fm), v, "raw = ({h:?}, {m:?})");
        }
    }

    #[test]
    fn format_minutes_variants() {
        assert_eq!(format_minutes(0, true), "0");
        assert_eq!(format_minutes(90, false), "1t 30min");
        assert_eq!(format_minutes(90, true), "+1t 30min");
        assert_eq!(format_minutes(-45, false), "-45min");
        assert_eq!(format_minutes(-45, true), "-45min");
        assert_eq!(format_minutes(120, true), "+2t");
    }

    #[test]
    fn display_round_trip() {
        for v in [0, 1, 59, 60, 61, 90, -90, 600, -1, 599_940 + 9999] {
            for sign in [true, false] {
                let shown = format_minutes(v, sign);
                assert_eq!(parse_display(&shown), Some(v), "shown = {shown}");
            }
        }
    }

    #[test]
    fn parse_display_rejects_garbage() {
        assert_eq!(parse_display(""), None);
        assert_eq!(parse_display("abc"), None);
        assert_eq!(parse_display("+"), None);
        assert_eq!(parse_display("1h 30m"), None);
    }

    #[test]
    fn title_case_collapses_spaces() {
        assert_eq!(title_case("  bob   smith "), "Bob Smith");
        assert_eq!(title_case("ANNA maria"), "Anna Maria");
        assert_eq!(title_case("élodie"), "Élodie");
        assert_eq!(title_case("   "), "");
    }
}
