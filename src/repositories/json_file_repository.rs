use crate::error::BookResult;
use crate::models::{AddressBook, ContactRecord};
use crate::repositories::traits::ContactRepository;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// One contact as it appears in the storage file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredRecord {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

impl From<&ContactRecord> for StoredRecord {
    fn from(record: &ContactRecord) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record.phones().iter().map(|p| p.as_str().to_string()).collect(),
            birthday: record.birthday().map(|b| b.as_str().to_string()),
        }
    }
}

impl StoredRecord {
    /// Rebuild a record, validating every phone and the birthday.
    pub fn into_record(self) -> BookResult<ContactRecord> {
        let mut record = ContactRecord::new(self.name);
        for phone in &self.phones {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = self.birthday.as_deref().filter(|b| !b.is_empty()) {
            record.add_birthday(birthday)?;
        }
        Ok(record)
    }
}

/// The storage document: a JSON object from contact name to stored record.
///
/// Entries keep the order they appear in, both when written and when read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredBook {
    pub entries: Vec<(String, StoredRecord)>,
}

impl From<&AddressBook> for StoredBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            entries: book
                .iter()
                .map(|record| (record.name().as_str().to_string(), StoredRecord::from(record)))
                .collect(),
        }
    }
}

impl StoredBook {
    /// Rebuild an address book. Records are keyed by their inner `name`.
    pub fn into_book(self) -> BookResult<AddressBook> {
        let mut book = AddressBook::new();
        for (key, stored) in self.entries {
            if key != stored.name {
                debug!(key = %key, name = %stored.name, "Stored key differs from record name");
            }
            book.add_record(stored.into_record()?);
        }
        Ok(book)
    }
}

impl Serialize for StoredBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

struct StoredBookVisitor;

impl<'de> Visitor<'de> for StoredBookVisitor {
    type Value = StoredBook;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from contact name to contact record")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, record)) = access.next_entry::<String, StoredRecord>()? {
            entries.push((name, record));
        }
        Ok(StoredBook { entries })
    }
}

impl<'de> Deserialize<'de> for StoredBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StoredBookVisitor)
    }
}

/// Contact repository backed by a single JSON file.
///
/// Saving truncates and rewrites the file in place. A crash mid-write can
/// leave a truncated file behind, and concurrent writers are not coordinated.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactRepository for JsonFileRepository {
    fn load(&self) -> BookResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Address book file not found, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredBook = serde_json::from_reader(BufReader::new(file))?;
        let book = stored.into_book()?;
        info!(path = %self.path.display(), contacts = book.len(), "Loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> BookResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &StoredBook::from(book))?;
        writer.flush()?;
        info!(path = %self.path.display(), contacts = book.len(), "Saved address book");
        Ok(())
    }
}
