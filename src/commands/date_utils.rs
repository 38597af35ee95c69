//! Date Utilities
//!
//! Activation dates are stored as YYYY-MM-DD strings.

use chrono::NaiveDate;

pub const ACTIVATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local date as YYYY-MM-DD (default for a new activation)
pub fn today_local() -> String {
    use chrono::Local;
    Local::now().date_naive().format(ACTIVATION_DATE_FORMAT).to_string()
}

/// Validate activation date format (YYYY-MM-DD, zero padded, real calendar day)
pub fn is_valid_activation_date(date_str: &str) -> bool {
    if date_str.len() != 10 {
        return false;
    }
    let bytes = date_str.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    if !date_str
        .chars()
        .enumerate()
        .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
    {
        return false;
    }
    NaiveDate::parse_from_str(date_str, ACTIVATION_DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_activation_date() {
        assert!(is_valid_activation_date("2024-05-01"));
        assert!(is_valid_activation_date("2024-02-29"));
        assert!(!is_valid_activation_date("2023-02-29"));
        assert!(!is_valid_activation_date("2024-5-1"));
        assert!(!is_valid_activation_date("20240501"));
        assert!(!is_valid_activation_date("2024/05/01"));
        assert!(!is_valid_activation_date("2024-13-01"));
        assert!(!is_valid_activation_date(""));
    }

    #[test]
    fn test_today_is_valid() {
        assert!(is_valid_activation_date(&today_local()));
    }
}
