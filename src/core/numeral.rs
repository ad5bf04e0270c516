//! Conversions between display text and numbers.

/// Render a number the way the display shows it.
///
/// Uses the default `f64` decimal text, so non-terminating results keep
/// every digit the float carries. Zero is always `"0"` (never `"-0"`) and
/// non-finite values are spelled `Infinity`, `-Infinity` and `NaN`.
///
/// ```rust
/// use tally::core::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(10.0 / 3.0), "3.3333333333333335");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Read the number shown on the display.
///
/// A trailing decimal point is accepted (`"5."` reads as 5). Text that is
/// not a number reads as 0.
pub fn parse_display(display: &str) -> f64 {
    display.parse().unwrap_or(0.0)
}

/// Whether `text` is something the display may legitimately show.
///
/// That is an optional leading `-`, at least one digit and at most one
/// `.`, or one of the names [`format_number`] gives non-finite values.
pub(crate) fn is_display_numeral(text: &str) -> bool {
    if matches!(text, "Infinity" | "-Infinity" | "NaN") {
        return true;
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.matches('.').count() <= 1
}
