pub mod json_file_repository;
pub mod traits;

pub use json_file_repository::{JsonFileRepository, StoredBook, StoredRecord};
pub use traits::ContactRepository;
