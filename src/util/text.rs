// src/util/text.rs
use chrono::{DateTime, Local, Utc};

/// Flatten `text` to one line and fit it into `width` characters.
///
/// Line breaks and tabs become spaces. Text longer than `width` is cut and
/// ends with `…`.
///
/// # Examples
///
/// ```
/// use notesview::util::text::fit_cell;
///
/// assert_eq!(fit_cell("Groceries\nmilk", 20), "Groceries milk");
/// assert_eq!(fit_cell("A rather long title", 8), "A rathe…");
/// ```
pub fn fit_cell(text: &str, width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if flat.chars().count() <= width {
        return flat;
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = flat.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Pad `text` with spaces to `width` characters
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - len))
}

/// Shown in place of a missing or unreadable timestamp
pub const INVALID_TIMESTAMP: &str = "Invalid Date";

/// Render a server timestamp as local date and time
pub fn format_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(timestamp) => timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => INVALID_TIMESTAMP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn given_short_text_when_fitting_then_returns_unchanged() {
        assert_eq!(fit_cell("Shopping", 10), "Shopping");
    }

    #[test]
    fn given_exact_width_when_fitting_then_does_not_truncate() {
        assert_eq!(fit_cell("abcde", 5), "abcde");
    }

    #[test]
    fn given_long_text_when_fitting_then_truncates_with_ellipsis() {
        let fitted = fit_cell("abcdefghij", 5);
        assert_eq!(fitted, "abcd…");
        assert_eq!(fitted.chars().count(), 5);
    }

    #[test]
    fn given_multiline_text_when_fitting_then_flattens_lines() {
        assert_eq!(fit_cell("a\nb\tc", 10), "a b c");
    }

    #[test]
    fn given_multibyte_text_when_fitting_then_counts_characters() {
        assert_eq!(fit_cell("äöüäöü", 4), "äöü…");
    }

    #[test]
    fn given_zero_width_when_fitting_then_returns_empty() {
        assert_eq!(fit_cell("abc", 0), "");
    }

    #[test]
    fn given_short_text_when_padding_then_fills_to_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }

    #[test]
    fn given_timestamp_when_formatting_then_uses_local_date_time() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let expected = timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();

        assert_eq!(format_timestamp(Some(&timestamp)), expected);
        assert_eq!(format_timestamp(Some(&timestamp)).len(), 19);
    }

    #[test]
    fn given_missing_timestamp_when_formatting_then_shows_placeholder() {
        assert_eq!(format_timestamp(None), "Invalid Date");
    }
}
