//! The address book: every record, keyed by name.
//!
//! Records are kept in insertion order and looked up with a linear scan,
//! which keeps rendering deterministic. Replacing a record keeps its
//! original position.

use crate::error::{AddressBookResult, NotFoundError};
use crate::models::Record;
use std::fmt;

/// A collection of records with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                tracing::warn!(name = %record.name(), "Overwriting existing record");
                self.records[index] = record;
            }
            None => {
                tracing::debug!(name = %record.name(), "Record added");
                self.records.push(record);
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let found = self.records.iter().find(|r| r.name().as_str() == name);
        if found.is_none() {
            tracing::debug!(name, "No record found");
        }
        found
    }

    /// Look up a record by exact name for editing in place.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let found = self.records.iter_mut().find(|r| r.name().as_str() == name);
        if found.is_none() {
            tracing::debug!(name, "No record found");
        }
        found
    }

    /// Remove and return the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| NotFoundError::Record(name.to_string()))?;
        tracing::debug!(name, "Record deleted");
        Ok(self.records.remove(index))
    }

    /// Whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.name().as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
