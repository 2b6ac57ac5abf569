//! Contact Book - a personal address book of names, phone numbers and birthdays.
//!
//! The library holds the data model and its persistence; the `contact-book`
//! binary wraps it in an interactive command loop.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and the address book that owns them
//! - **repositories**: Loading and saving a book (JSON file)
//! - **commands**: Text commands and user-facing error messages
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use commands::{
    execute, parse_input, present_error, run_session, Command, CommandContext, Reply,
};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{AddressBook, ContactRecord, UpcomingBirthday};
pub use repositories::{ContactRepository, JsonFileRepository};
