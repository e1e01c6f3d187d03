use crate::Priority;

use std::str::FromStr;

#[test]
fn test_priority_parses_mixed_case() {
    assert_eq!(Priority::from_str("High").unwrap(), Priority::High);
    assert_eq!(Priority::from_str("medium").unwrap(), Priority::Medium);
    assert_eq!(Priority::from_str(" LOW ").unwrap(), Priority::Low);
    assert!(Priority::from_str("critical").is_err());
}

#[test]
fn test_priority_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
}

#[test]
fn test_priority_deserializes_capitalized() {
    let parsed: Priority = serde_json::from_str("\"Medium\"").unwrap();
    assert_eq!(parsed, Priority::Medium);
}

#[test]
fn test_priority_default_is_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}
