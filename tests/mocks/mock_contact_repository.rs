use contact_book::error::{BookError, BookResult};
use contact_book::models::AddressBook;
use contact_book::repositories::{ContactRepository, StoredBook};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps the stored document as JSON text in memory, so it goes through the
/// same encoding as the file repository, and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    document: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with a raw JSON document.
    pub fn with_document(document: &str) -> Self {
        let repo = Self::new();
        *repo.document.lock().unwrap() = Some(document.to_string());
        repo
    }

    /// The stored JSON document, if anything was saved.
    pub fn document(&self) -> Option<String> {
        self.document.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn record_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> BookResult<AddressBook> {
        self.record_call("load");
        match self.document.lock().unwrap().as_deref() {
            Some(text) => serde_json::from_str::<StoredBook>(text)?.into_book(),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> BookResult<()> {
        self.record_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(BookError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock save failure",
            )));
        }
        let text = serde_json::to_string(&StoredBook::from(book))?;
        *self.document.lock().unwrap() = Some(text);
        Ok(())
    }
}
