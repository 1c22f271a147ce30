//! Address Book - an in-memory store of contacts and their phone numbers.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`)
//! - **models**: The `Record` of one contact
//! - **book**: The `AddressBook` of all records, keyed by name
//! - **error**: Error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut john = Record::new("John").unwrap();
//! john.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john);
//! assert_eq!(book.to_string(), "Contact name: John, phones: 1234567890");
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, NotFoundError};
pub use models::Record;
