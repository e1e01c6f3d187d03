use crate::{NewProject, ProjectUpdate};

#[test]
fn given_whitespace_title_when_validated_then_rejected() {
    let err = NewProject::new("   ", "desc").validate().unwrap_err();
    assert_eq!(err.user_message(), "Title and description are required.");
}

#[test]
fn given_status_only_update_when_validated_then_ok() {
    let update = ProjectUpdate {
        status: Some("In Progress".into()),
        ..ProjectUpdate::default()
    };
    assert!(update.validate().is_ok());
}

#[test]
fn given_blank_description_update_when_validated_then_rejected() {
    let update = ProjectUpdate {
        description: Some(" ".into()),
        ..ProjectUpdate::default()
    };
    assert!(update.validate().is_err());
}
