use crate::{NewTicket, TicketStatus, TicketUpdate};

use serde_json::json;

#[test]
fn given_complete_ticket_when_validated_then_ok() {
    let ticket = NewTicket::new("Title", "Description", "P1");
    assert!(ticket.validate().is_ok());
}

#[test]
fn given_blank_required_field_when_validated_then_rejected() {
    for ticket in [
        NewTicket::new("  ", "Description", "P1"),
        NewTicket::new("Title", "", "P1"),
        NewTicket::new("Title", "Description", ""),
    ] {
        let err = ticket.validate().unwrap_err();
        assert_eq!(
            err.user_message(),
            "Please fill in all required fields (Title, Description, Project)."
        );
    }
}

#[test]
fn given_new_ticket_when_serialized_then_camel_case_and_open() {
    let value = serde_json::to_value(NewTicket::new("Title", "Description", "P1")).unwrap();
    assert_eq!(
        value,
        json!({
            "title": "Title",
            "description": "Description",
            "priority": "medium",
            "status": "open",
            "projectId": "P1"
        })
    );
}

#[test]
fn given_empty_update_when_validated_then_rejected() {
    assert!(TicketUpdate::default().validate().is_err());
}

#[test]
fn given_assign_with_no_users_when_validated_then_rejected() {
    let err = TicketUpdate::assign(vec![]).validate().unwrap_err();
    assert_eq!(
        err.user_message(),
        "Please select at least one team member to assign."
    );
}

#[test]
fn given_partial_update_when_serialized_then_only_present_fields() {
    let update = TicketUpdate {
        status: Some(TicketStatus::InProgress),
        ..TicketUpdate::default()
    };
    assert!(update.validate().is_ok());
    assert_eq!(
        serde_json::to_value(update).unwrap(),
        json!({ "status": "in_progress" })
    );
}
