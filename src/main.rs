//! Contact Book - Main entry point
//!
//! Runs an interactive session over stdin/stdout. The book is loaded from the
//! configured file at start and saved back when the session ends, including
//! when it ends with an I/O error.

use anyhow::Result;
use contact_book::{run_session, Config, ContactRepository, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep stdout for the dialogue)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository = JsonFileRepository::new(config.book_path.clone());
    let mut book = match repository.load() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let outcome = run_session(
        &mut book,
        config.birthday_window_days,
        io::stdin().lock(),
        io::stdout(),
    );
    if let Err(e) = &outcome {
        error!("Session ended with an I/O error: {}", e);
    }

    repository.save(&book)?;
    outcome?;

    info!("Contact book shutdown complete");
    Ok(())
}
