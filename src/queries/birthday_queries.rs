use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

use crate::model::{Birthday, Record};
use crate::validation::DATE_FORMAT;

pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;
/// Longest window accepted from configuration.
pub const MAX_LOOKAHEAD_DAYS: u32 = 366;

/// A contact to congratulate and the working day to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

/// The first anniversary of `birthday` on or after `today`.
pub fn next_occurrence(birthday: Birthday, today: NaiveDate) -> NaiveDate {
    let this_year = birthday.in_year(today.year());
    if this_year < today {
        birthday.in_year(today.year() + 1)
    } else {
        this_year
    }
}

/// Moves a Saturday or Sunday to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date.checked_add_signed(Duration::days(2)).unwrap_or(date),
        Weekday::Sun => date.checked_add_signed(Duration::days(1)).unwrap_or(date),
        _ => date,
    }
}

/// Birthdays falling in `[today, today + lookahead_days - 1]`, in the
/// order the records are given. Records without a birthday are skipped.
pub fn upcoming<'a, I>(records: I, today: NaiveDate, lookahead_days: u32) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    if lookahead_days == 0 {
        return Vec::new();
    }
    let window_end = today
        .checked_add_signed(Duration::days(i64::from(lookahead_days) - 1))
        .unwrap_or(NaiveDate::MAX);

    records
        .into_iter()
        .filter_map(|record| {
            let next = next_occurrence(record.birthday()?, today);
            if next < today || next > window_end {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: congratulation_date(next),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_are_unchanged() {
        // 2024-06-12 is a Wednesday
        assert_eq!(congratulation_date(date(2024, 6, 12)), date(2024, 6, 12));
    }

    #[test]
    fn weekend_moves_to_monday() {
        assert_eq!(congratulation_date(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 16)), date(2024, 6, 17));
    }

    #[test]
    fn passed_birthday_advances_to_next_year() {
        let bd = Birthday::parse("01.01.1990").unwrap();
        assert_eq!(next_occurrence(bd, date(2024, 6, 10)), date(2025, 1, 1));
    }

    #[test]
    fn window_end_saturates_at_max_date() {
        let mut record = Record::new("John").unwrap();
        record.set_birthday("12.06.1990").unwrap();
        let upcoming = upcoming([&record], date(2024, 6, 10), u32::MAX);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 12));
    }

    #[test]
    fn birthday_today_is_not_advanced() {
        let bd = Birthday::parse("10.06.1990").unwrap();
        assert_eq!(next_occurrence(bd, date(2024, 6, 10)), date(2024, 6, 10));
    }
}
