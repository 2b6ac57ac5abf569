use crate::error::BookResult;
use crate::models::AddressBook;

/// Repository for persisting an address book.
///
/// Provides abstraction over where the book is stored, enabling different
/// implementations (JSON file, in-memory mock).
pub trait ContactRepository {
    /// Load the stored book.
    ///
    /// An absent store yields an empty book rather than an error.
    fn load(&self) -> BookResult<AddressBook>;

    /// Store `book`, replacing whatever was stored before.
    fn save(&self, book: &AddressBook) -> BookResult<()>;
}
