//! Domain value objects.
//!
//! `Name` and `Phone` validate at construction time, so a `Record` can never
//! hold an empty name or a malformed phone number.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
