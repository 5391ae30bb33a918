/// Utility helpers for the album player

/// Placeholder shown when a time value is not known yet.
pub const TIME_PLACEHOLDER: &str = "-:--";

/// Create a simple slug from a string suitable for URLs.
/// Lowercases the string, converts groups of non-alphanumeric chars to single hyphens,
/// and trims leading/trailing hyphens.
pub fn slugify<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref().to_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut prev_dash = false;

    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }

    out.trim_matches('-').to_string()
}

/// Format a position or duration in seconds as `m:ss`.
///
/// Minutes are unbounded, so an hour-long value renders as `60:00`.
/// Unknown, NaN, infinite and negative values render as [`TIME_PLACEHOLDER`].
pub fn format_time(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite() && *s >= 0.0) else {
        return TIME_PLACEHOLDER.to_string();
    };
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_placeholder_for_unknown_values() {
        assert_eq!(format_time(None), "-:--");
        assert_eq!(format_time(Some(f64::NAN)), "-:--");
        assert_eq!(format_time(Some(f64::INFINITY)), "-:--");
        assert_eq!(format_time(Some(-3.0)), "-:--");
    }

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(Some(0.0)), "0:00");
        assert_eq!(format_time(Some(9.0)), "0:09");
        assert_eq!(format_time(Some(61.0)), "1:01");
        assert_eq!(format_time(Some(600.0)), "10:00");
        assert_eq!(format_time(Some(161.71)), "2:41");
    }

    #[test]
    fn format_time_has_no_hour_component() {
        assert_eq!(format_time(Some(4503.0)), "75:03");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("The Colors"), "the-colors");
        assert_eq!(slugify("  Hello,  World! "), "hello-world");
        assert_eq!(slugify("Déjà Vu"), "d-j-vu");
    }
}
