#![allow(missing_docs)]
#![cfg(feature = "serde")]

use userinput::{DEFAULT_INITIAL_CAPACITY, InputError, InputOptions, Locale};

#[test]
fn options_fill_missing_fields_with_defaults() {
    let options: InputOptions = serde_json::from_str(r#"{"max_capacity": 4096}"#).unwrap();
    assert_eq!(
        options,
        InputOptions {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_capacity: Some(4096),
            strip_carriage_return: true,
        }
    );
}

#[test]
fn locale_by_name() {
    let locale: Locale = serde_json::from_str(r#""german""#).unwrap();
    assert_eq!(locale, Locale::German);
    assert_eq!(serde_json::to_string(&Locale::English).unwrap(), r#""english""#);
}

#[test]
fn error_kind_by_name() {
    let error: InputError = serde_json::from_str(r#""IntegerOutOfRange""#).unwrap();
    assert_eq!(error, InputError::IntegerOutOfRange);
}
