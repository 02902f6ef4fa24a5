use tracing::info;

use crate::address_book::AddressBook;
use crate::error::{BotError, BotResult};
use crate::model::{PhoneNumber, Record};
use crate::validation;

/// Adds `number` to the contact called `name`, creating the contact if needed.
/// A new contact is only stored once its first phone is valid.
pub fn add_phone(book: &mut AddressBook, name: &str, number: &str) -> BotResult<()> {
    let name = validation::non_blank(name, "name")?;
    let name = name.as_str();
    if let Some(record) = book.find_mut(name) {
        record.add_phone(number)?;
        info!(name, "phone added to existing contact");
        return Ok(());
    }

    let mut record = Record::new(name)?;
    record.add_phone(number)?;
    book.add_record(record);
    info!(name, "contact created");
    Ok(())
}

pub fn change_phone(book: &mut AddressBook, name: &str, old: &str, new: &str) -> BotResult<()> {
    find_mut(book, name)?.edit_phone(old, new)?;
    info!(name, "phone changed");
    Ok(())
}

pub fn remove_phone(book: &mut AddressBook, name: &str, number: &str) -> BotResult<PhoneNumber> {
    let removed = find_mut(book, name)?.remove_phone(number)?;
    info!(name, "phone removed");
    Ok(removed)
}

pub fn set_birthday(book: &mut AddressBook, name: &str, date: &str) -> BotResult<()> {
    find_mut(book, name)?.set_birthday(date)?;
    info!(name, "birthday set");
    Ok(())
}

pub fn delete_contact(book: &mut AddressBook, name: &str) -> BotResult<Record> {
    let record = book.delete(name.trim())?;
    info!(name, "contact deleted");
    Ok(record)
}

/// Looks a contact up by its trimmed name, the form `Record::new` stores.
fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> BotResult<&'a mut Record> {
    let name = name.trim();
    book.find_mut(name)
        .ok_or_else(|| BotError::not_found("Contact", name))
}
