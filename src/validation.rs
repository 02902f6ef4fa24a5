use chrono::NaiveDate;

use crate::error::{BotError, BotResult};

/// Date format accepted for birthdays, e.g. `15.06.1990`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BotResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BotError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that a string is exactly ten ASCII digits.
pub fn ten_digits(value: &str) -> BotResult<String> {
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(BotError::InvalidPhone(value.to_string()))
    }
}

/// Parses a `DD.MM.YYYY` date.
pub fn parse_date(value: &str) -> BotResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| BotError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_trims_whitespace() {
        assert_eq!(non_blank("  Alice  ", "name").unwrap(), "Alice");
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert!(non_blank("   ", "name").is_err());
    }

    #[test]
    fn ten_digits_accepts_valid_number() {
        assert_eq!(ten_digits("0501234567").unwrap(), "0501234567");
    }

    #[test]
    fn ten_digits_rejects_short_and_long() {
        assert!(ten_digits("123456789").is_err());
        assert!(ten_digits("12345678901").is_err());
        assert!(ten_digits("").is_err());
    }

    #[test]
    fn ten_digits_rejects_non_digits() {
        assert!(ten_digits("050-123456").is_err());
        assert!(ten_digits("050123456a").is_err());
        assert!(ten_digits("+380501234").is_err());
    }

    #[test]
    fn ten_digits_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(ten_digits("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn parse_date_accepts_day_month_year() {
        assert_eq!(
            parse_date("15.06.1990").unwrap(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("1990-06-15").is_err());
        assert!(parse_date("31.02.1990").is_err());
        assert!(parse_date("tomorrow").is_err());
    }
}
