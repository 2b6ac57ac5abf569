//! The address book: every contact record, keyed by name.

use crate::error::BookResult;
use crate::models::ContactRecord;
use crate::repositories::{ContactRepository, JsonFileRepository};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// A contact whose birthday falls inside an upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// The date of the upcoming anniversary
    pub date: NaiveDate,

    /// Days from today until `date` (0 means today)
    pub days_until: i64,
}

/// An owned collection of contact records keyed by name.
///
/// Names are unique. Records are listed in the order their names were first
/// added; the order only matters for display and for the saved file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// A record already stored under the same name is discarded and returned;
    /// the two are not merged.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        let name = record.name().as_str().to_string();
        let previous = self.records.insert(name.clone(), record);
        if previous.is_none() {
            self.order.push(name);
        } else {
            debug!(contact = %name, "Replaced existing contact");
        }
        previous
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = self.records.remove(name)?;
        self.order.retain(|n| n != name);
        debug!(contact = %name, "Deleted contact");
        Some(removed)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Contact names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Write the whole book to `path` as JSON, replacing the file.
    pub fn save(&self, path: impl AsRef<Path>) -> BookResult<()> {
        JsonFileRepository::new(path.as_ref()).save(self)
    }

    /// Replace the book's contents with the records stored at `path`.
    ///
    /// A missing file leaves the book empty and is not an error. Every stored
    /// phone and birthday is validated again. On error the book is unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        *self = JsonFileRepository::new(path.as_ref()).load()?;
        Ok(())
    }

    /// Contacts whose birthday falls within the next seven days, today included.
    pub fn birthdays_in_next_week(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), 7)
    }

    /// Contacts whose next birthday is less than `window_days` days after `today`.
    ///
    /// Results are ordered by `days_until`, then by name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .iter()
            .filter_map(|record| {
                let date = record.birthday()?.next_occurrence(today)?;
                let days_until = date.signed_duration_since(today).num_days();
                (days_until < i64::from(window_days)).then(|| UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date,
                    days_until,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.days_until
                .cmp(&b.days_until)
                .then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }
}
