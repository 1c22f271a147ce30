//! Integration tests for Record phone management.

use address_book::{AddressBookError, NotFoundError, Record, ValidationError};

#[test]
fn test_add_then_find_then_remove() {
    let mut record = Record::new("John").unwrap();
    record.add_phone("1234567890").unwrap();
    assert_eq!(
        record.find_phone("1234567890").map(|p| p.as_str()),
        Some("1234567890")
    );

    record.remove_phone("1234567890").unwrap();
    assert!(record.find_phone("1234567890").is_none());
}

#[test]
fn test_edit_phone_replaces_value() {
    let mut record = Record::new("John").unwrap();
    record.add_phone("1234567890").unwrap();

    record.edit_phone("1234567890", "1112223333").unwrap();

    assert!(record.find_phone("1234567890").is_none());
    assert!(record.find_phone("1112223333").is_some());
}

#[test]
fn test_edit_phone_missing_old() {
    let mut record = Record::new("John").unwrap();
    record.add_phone("5555555555").unwrap();

    let result = record.edit_phone("1234567890", "1112223333");
    assert_eq!(
        result,
        Err(AddressBookError::NotFound(NotFoundError::Phone(
            "1234567890".to_string()
        )))
    );
    assert_eq!(record.to_string(), "Contact name: John, phones: 5555555555");
}

#[test]
fn test_edit_phone_with_invalid_new_loses_old() {
    let mut record = Record::new("John").unwrap();
    record.add_phone("1234567890").unwrap();
    record.add_phone("5555555555").unwrap();

    let result = record.edit_phone("1234567890", "111-222-3333");
    assert_eq!(
        result,
        Err(AddressBookError::Validation(ValidationError::InvalidPhone(
            "111-222-3333".to_string()
        )))
    );
    assert_eq!(record.to_string(), "Contact name: John, phones: 5555555555");
}

#[test]
fn test_find_phone_has_no_side_effects() {
    let mut record = Record::new("Jane").unwrap();
    record.add_phone("9876543210").unwrap();
    let before = record.clone();

    let _ = record.find_phone("9876543210");
    let _ = record.find_phone("0000000000");

    assert_eq!(record, before);
}

#[test]
fn test_empty_name_is_rejected() {
    assert_eq!(Record::new("").unwrap_err(), ValidationError::EmptyName);
}
