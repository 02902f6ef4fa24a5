use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::Birthday;
use super::phone::PhoneNumber;
use crate::error::{BotError, BotResult};
use crate::validation;

/// A contact: a name, its phone numbers, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

/// Deserialized shape of a `Record` before the name is validated.
#[derive(Deserialize)]
struct RawRecord {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<RawRecord> for Record {
    type Error = BotError;

    fn try_from(raw: RawRecord) -> BotResult<Self> {
        let mut record = Record::new(&raw.name)?;
        record.phones = raw.phones;
        record.birthday = raw.birthday;
        Ok(record)
    }
}

impl Record {
    pub fn new(name: &str) -> BotResult<Self> {
        Ok(Self {
            name: validation::non_blank(name, "name")?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Appends a phone. The same number may be added more than once.
    pub fn add_phone(&mut self, number: &str) -> BotResult<()> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `number`.
    pub fn remove_phone(&mut self, number: &str) -> BotResult<PhoneNumber> {
        let idx = self.position_of(number)?;
        Ok(self.phones.remove(idx))
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BotResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let idx = self.position_of(old)?;
        self.phones[idx] = replacement;
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    pub fn set_birthday(&mut self, date: &str) -> BotResult<()> {
        self.birthday = Some(Birthday::parse(date)?);
        Ok(())
    }

    fn position_of(&self, number: &str) -> BotResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == number)
            .ok_or_else(|| BotError::not_found("Phone", number))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
