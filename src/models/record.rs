//! Contact record: one person's name, phone numbers and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use std::fmt;
use tracing::debug;

/// A single contact in the address book.
///
/// Phone numbers keep their insertion order and may repeat. Every stored phone
/// and birthday has passed validation, so a record always survives a save and
/// reload unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<ContactName>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one was set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Absent phones are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        debug!(
            contact = %self.name,
            removed = before - self.phones.len(),
            "Removed phone"
        );
    }

    /// Replace every phone equal to `old_phone` with `new_phone`.
    ///
    /// When no phone matches `old_phone` the list is left as is.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when `new_phone` is malformed,
    /// even if no phone matches `old_phone`. Nothing changes in that case.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> Result<(), ValidationError> {
        let replacement = PhoneNumber::new(new_phone)?;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old_phone) {
            *phone = replacement.clone();
        }
        debug!(contact = %self.name, old = old_phone, new = new_phone, "Edited phone");
        Ok(())
    }

    /// The first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate `birthday` and set it, replacing any previous birthday.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(birthday)?;
        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
