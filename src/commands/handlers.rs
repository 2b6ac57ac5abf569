//! Command execution against an address book.

use super::Command;
use crate::config::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, ContactRecord};
use chrono::{Local, NaiveDate};
use tracing::debug;

/// What the loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show this text and keep going
    Message(String),

    /// Save and stop
    Exit,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}

/// Inputs a command needs besides the book itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// The date `birthdays` counts from
    pub today: NaiveDate,

    /// How many days `birthdays` looks ahead
    pub birthday_window_days: u32,
}

impl CommandContext {
    /// Context for today's local date.
    pub fn now(birthday_window_days: u32) -> Self {
        Self {
            today: Local::now().date_naive(),
            birthday_window_days,
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::now(DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }
}

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut ContactRecord> {
    book.find_mut(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}

fn record<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a ContactRecord> {
    book.find(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}

/// Run `command` against `book`.
///
/// # Errors
///
/// - `BookError::NotFound` when the command names a contact that does not exist
/// - `BookError::Validation` when a phone or birthday is malformed
pub fn execute(
    book: &mut AddressBook,
    command: Command,
    context: &CommandContext,
) -> BookResult<Reply> {
    debug!(?command, "Executing command");

    let reply = match command {
        Command::Hello => Reply::message("How can I help you?"),

        Command::Add { name, phone } => match book.find_mut(&name) {
            Some(existing) => {
                existing.add_phone(&phone)?;
                Reply::message("Contact updated.")
            }
            None => {
                let mut record = ContactRecord::new(name);
                record.add_phone(&phone)?;
                book.add_record(record);
                Reply::message("Contact added.")
            }
        },

        Command::Change {
            name,
            old_phone,
            new_phone,
        } => {
            let record = record_mut(book, &name)?;
            let had_phone = record.find_phone(&old_phone).is_some();
            record.edit_phone(&old_phone, &new_phone)?;
            if had_phone {
                Reply::message("Contact updated.")
            } else {
                Reply::message(format!("{} has no phone {}.", name, old_phone))
            }
        }

        Command::Phone { name } => {
            let record = record(book, &name)?;
            if record.phones().is_empty() {
                Reply::message(format!("{} has no phones.", name))
            } else {
                let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
                Reply::message(format!("{}: {}", name, phones.join("; ")))
            }
        }

        Command::RemovePhone { name, phone } => {
            let record = record_mut(book, &name)?;
            if record.find_phone(&phone).is_some() {
                record.remove_phone(&phone);
                Reply::message("Phone removed.")
            } else {
                Reply::message(format!("{} has no phone {}.", name, phone))
            }
        }

        Command::Delete { name } => {
            book.delete(&name)
                .ok_or_else(|| BookError::NotFound(name.clone()))?;
            Reply::message("Contact deleted.")
        }

        Command::AddBirthday { name, birthday } => {
            record_mut(book, &name)?.add_birthday(&birthday)?;
            Reply::message("Birthday added.")
        }

        Command::ShowBirthday { name } => match record(book, &name)?.birthday() {
            Some(birthday) => Reply::message(format!("{}: {}", name, birthday)),
            None => Reply::message(format!("{} has no birthday set.", name)),
        },

        Command::Birthdays => {
            let window = context.birthday_window_days;
            let upcoming = book.upcoming_birthdays(context.today, window);
            if upcoming.is_empty() {
                Reply::message(format!("No birthdays in the next {} days.", window))
            } else {
                let lines: Vec<String> = upcoming
                    .iter()
                    .map(|u| {
                        let when = match u.days_until {
                            0 => "today".to_string(),
                            1 => "tomorrow".to_string(),
                            n => format!("in {} days", n),
                        };
                        format!("{}: {} ({})", u.name, u.date.format("%d.%m.%Y"), when)
                    })
                    .collect();
                Reply::message(lines.join("\n"))
            }
        }

        Command::All => {
            if book.is_empty() {
                Reply::message("Address book is empty.")
            } else {
                let lines: Vec<String> = book.iter().map(ToString::to_string).collect();
                Reply::message(lines.join("\n"))
            }
        }

        Command::Exit => Reply::Exit,
    };

    Ok(reply)
}
