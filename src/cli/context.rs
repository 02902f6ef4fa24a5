use chrono::{Local, NaiveDate};
use std::io::{self, Write};

use crate::address_book::AddressBook;
use crate::config::Config;

pub struct CLIContext {
    pub book: AddressBook,
    pub config: Config,
    pinned_today: Option<NaiveDate>,
}

impl CLIContext {
    pub fn new(config: Config) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            pinned_today: None,
        }
    }

    /// Fixes the date used by `birthdays` instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self) -> Option<String> {
        print!("{}", self.config.prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }
}
