//! Color helpers for signed minute values.

use ansi_term::Colour;

/// \>0 → green, <0 → red, 0 → none
pub fn color_for_value(value: i64) -> Option<Colour> {
    if value > 0 {
        Some(Colour::Green)
    } else if value < 0 {
        Some(Colour::Red)
    } else {
        None
    }
}

/// Paint `text` with the color matching the sign of `value`.
pub fn paint_signed(value: i64, text: &str) -> String {
    match color_for_value(value) {
        Some(c) => c.paint(text).to_string(),
        None => text.to_string(),
    }
}

pub fn grey(text: &str) -> String {
    Colour::Fixed(244).paint(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::formatting::strip_ansi;

    #[test]
    fn zero_is_not_painted() {
        assert_eq!(paint_signed(0, "0"), "0");
        assert_ne!(paint_signed(5, "+5min"), "+5min");
        assert_eq!(strip_ansi(&paint_signed(-5, "-5min")), "-5min");
    }
}
