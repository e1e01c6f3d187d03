use crate::{Credentials, NewComment};

#[test]
fn given_valid_comment_when_built_then_text_trimmed() {
    let comment = NewComment::new("  looks good  ", Some("U1"), "T1").unwrap();
    assert_eq!(comment.text, "looks good");
    assert_eq!(
        serde_json::to_value(&comment).unwrap(),
        serde_json::json!({ "text": "looks good", "userId": "U1", "ticketId": "T1" })
    );
}

#[test]
fn given_missing_parts_when_built_then_specific_messages() {
    let cases = [
        (NewComment::new(" ", Some("U1"), "T1"), "Comment cannot be empty."),
        (
            NewComment::new("hi", None, "T1"),
            "You must be logged in to post a comment.",
        ),
        (
            NewComment::new("hi", Some("U1"), ""),
            "Cannot post comment: Missing ticket ID.",
        ),
    ];

    for (result, expected) in cases {
        assert_eq!(result.unwrap_err().user_message(), expected);
    }
}

#[test]
fn given_credentials_when_debug_formatted_then_password_hidden() {
    let creds = Credentials::new("a@example.com", "hunter2");
    let debug = format!("{creds:?}");
    assert!(debug.contains("a@example.com"));
    assert!(!debug.contains("hunter2"));
}
