use crate::{User, UserRole};

use serde_json::json;

#[test]
fn given_name_when_display_name_then_prefers_name() {
    let user: User = serde_json::from_value(json!({
        "_id": "U1", "username": "ada", "name": "Ada", "email": "ada@example.com", "role": "developer"
    }))
    .unwrap();

    assert_eq!(user.display_name(), "Ada");
    assert_eq!(user.role(), Some(UserRole::Developer));
}

#[test]
fn given_no_name_when_display_name_then_falls_back() {
    let user: User = serde_json::from_value(json!({ "_id": "U1", "username": "ada" })).unwrap();
    assert_eq!(user.display_name(), "ada");

    let anonymous: User = serde_json::from_value(json!({ "_id": "U2" })).unwrap();
    assert_eq!(anonymous.display_name(), "Unknown User");
    assert_eq!(anonymous.role(), None);
}
