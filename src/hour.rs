use crate::field::{is_space, normalize_field};

pub const HOURS_PER_DAY: usize = 24;

/// Recover the hour of day from a loosely formatted timestamp.
///
/// Only the one or two digits directly in front of the first colon count,
/// with whitespace between them ignored. `"2024-01-01 08:05:00"`, `"8:05"`
/// and `" 0 8 :05"` all give 8. AM/PM markers are not interpreted, so
/// `"5:30 PM"` gives 5.
pub fn parse_hour(raw: &str) -> Option<u8> {
    let field = normalize_field(raw);
    let colon = field.find(':')?;
    if colon == 0 {
        return None;
    }

    let mut before = field[..colon].chars().rev().skip_while(|c| is_space(*c));
    let ones = before.next()?.to_digit(10)?;

    let mut before = before.skip_while(|c| is_space(*c));
    let hour = match before.next().and_then(|c| c.to_digit(10)) {
        Some(tens) => tens * 10 + ones,
        None => ones,
    };

    if hour < HOURS_PER_DAY as u32 {
        Some(hour as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_times() {
        assert_eq!(parse_hour("08:15"), Some(8));
        assert_eq!(parse_hour("8:15"), Some(8));
        assert_eq!(parse_hour("23:59"), Some(23));
        assert_eq!(parse_hour("00:00"), Some(0));
    }

    #[test]
    fn test_date_prefixed_times() {
        assert_eq!(parse_hour("2024-01-01 08:05:00"), Some(8));
        assert_eq!(parse_hour("2024-01-01T17:45:00Z"), Some(17));
        assert_eq!(parse_hour("01/02/2024T9:00"), Some(9));
        assert_eq!(parse_hour("01/02/2024 -9:00"), Some(9));
    }

    #[test]
    fn test_whitespace_lets_date_digits_join_the_hour() {
        // The year's last digit becomes the tens digit, giving 49.
        assert_eq!(parse_hour("01/02/2024 9:00"), None);
        assert_eq!(parse_hour("01/02/2021 9:00"), Some(19));
    }

    #[test]
    fn test_am_pm_is_not_adjusted() {
        assert_eq!(parse_hour("  5:30 PM"), Some(5));
        assert_eq!(parse_hour("11:00 AM"), Some(11));
    }

    #[test]
    fn test_whitespace_between_digits_and_colon() {
        assert_eq!(parse_hour("1 2 :30"), Some(12));
        assert_eq!(parse_hour("x 7 :30"), Some(7));
        assert_eq!(parse_hour("\"14:10\""), Some(14));
    }

    #[test]
    fn test_only_first_colon_counts() {
        assert_eq!(parse_hour("ab:12:30"), None);
        assert_eq!(parse_hour("3:12:30"), Some(3));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_hour("24:00"), None);
        assert_eq!(parse_hour("99:00"), None);
        // Only two digits are read, so "123" is taken as 23.
        assert_eq!(parse_hour("123:00"), Some(23));
    }

    #[test]
    fn test_failures() {
        assert_eq!(parse_hour(""), None);
        assert_eq!(parse_hour("   "), None);
        assert_eq!(parse_hour("0815"), None);
        assert_eq!(parse_hour(":15"), None);
        assert_eq!(parse_hour("  :15"), None);
        assert_eq!(parse_hour("noon:15"), None);
    }
}
