use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

use crate::error::{BotError, BotResult};
use crate::model::Record;
use crate::queries::birthday_queries::{self, UpcomingBirthday};

/// All contacts for the session, keyed by name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Inserts `record`, replacing any record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter().position(|r| r.name() == record.name()) {
            Some(idx) => {
                debug!(name = record.name(), "replacing record");
                self.records[idx] = record;
            }
            None => {
                debug!(name = record.name(), "adding record");
                self.records.push(record);
            }
        }
    }

    pub fn delete(&mut self, name: &str) -> BotResult<Record> {
        let idx = self
            .records
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| BotError::not_found("Contact", name))?;
        debug!(name, "deleting record");
        Ok(self.records.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Birthdays in the week starting `today`, with weekend dates moved to Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, birthday_queries::DEFAULT_LOOKAHEAD_DAYS)
    }

    /// Same as `upcoming_birthdays` over a window of `lookahead_days` days.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        lookahead_days: u32,
    ) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming(self.iter(), today, lookahead_days)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return f.write_str("AddressBook is empty.");
        }
        let lines: Vec<String> = self.records.iter().map(|r| r.to_string()).collect();
        f.write_str(&lines.join("\n"))
    }
}
