//! Record model: one contact's name and phone numbers.

use crate::domain::{Name, Phone, ValidationError};
use crate::error::{AddressBookResult, NotFoundError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// No duplicate check is made.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> AddressBookResult<()> {
        let phone = Phone::new(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> AddressBookResult<()> {
        let index = self
            .position(phone)
            .ok_or_else(|| NotFoundError::Phone(phone.to_string()))?;
        self.phones.remove(index);
        tracing::debug!(name = %self.name, phone, "Phone removed");
        Ok(())
    }

    /// Replace `old` with `new`, keeping its position in the phone list.
    ///
    /// `old` is removed before `new` is validated. When `old` is missing the
    /// record is untouched, but when `new` is malformed the record ends up
    /// without `old` and without a replacement.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> AddressBookResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| NotFoundError::Phone(old.to_string()))?;
        self.phones.remove(index);

        let phone = Phone::new(new)?;
        tracing::debug!(name = %self.name, old, new = %phone, "Phone edited");
        self.phones.insert(index, phone);
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
