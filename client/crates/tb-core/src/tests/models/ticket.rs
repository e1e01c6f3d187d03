use crate::{Priority, Ticket, TicketStatus};

use serde_json::json;

#[test]
fn given_backend_ticket_when_deserialized_then_maps_wire_fields() {
    let ticket: Ticket = serde_json::from_value(json!({
        "_id": "T1",
        "title": "Fix login",
        "description": "Users cannot log in",
        "priority": "High",
        "status": "in_progress",
        "assignee": ["U1", "U2"],
        "projectId": "P1",
        "createdAt": "2024-01-01T10:00:00.000Z"
    }))
    .unwrap();

    assert_eq!(ticket.id, "T1");
    assert_eq!(ticket.priority, Priority::High);
    assert_eq!(ticket.status_bucket(), TicketStatus::InProgress);
    assert_eq!(ticket.assignee, vec!["U1".to_string(), "U2".to_string()]);
    assert_eq!(ticket.project_id.as_deref(), Some("P1"));
    assert!(ticket.created_at.is_some());
}

#[test]
fn given_populated_references_when_deserialized_then_ids_extracted() {
    let ticket: Ticket = serde_json::from_value(json!({
        "_id": "T1",
        "title": "Populated",
        "assignee": { "_id": "U9", "name": "Nine" },
        "projectId": { "_id": "P7", "title": "Seven" }
    }))
    .unwrap();

    assert_eq!(ticket.assignee, vec!["U9".to_string()]);
    assert_eq!(ticket.project_id.as_deref(), Some("P7"));
}

#[test]
fn given_nulls_and_missing_fields_when_deserialized_then_defaults() {
    let ticket: Ticket = serde_json::from_value(json!({
        "id": "T2",
        "title": "Sparse",
        "description": null,
        "priority": "urgent",
        "assignee": null
    }))
    .unwrap();

    assert_eq!(ticket.id, "T2");
    assert_eq!(ticket.description, "");
    assert_eq!(ticket.priority, Priority::Medium);
    assert!(ticket.assignee.is_empty());
    assert_eq!(ticket.status_bucket(), TicketStatus::Open);
}

#[test]
fn given_ticket_when_status_set_then_wire_key_stored() {
    let mut ticket = Ticket::new("T1", "Title", TicketStatus::ToDo);
    ticket.set_status(TicketStatus::Done);
    assert_eq!(ticket.status, "done");
}

#[test]
fn given_assignees_when_checked_then_membership_reported() {
    let mut ticket = Ticket::new("T1", "Title", TicketStatus::Open);
    ticket.assignee = vec!["U1".into()];
    assert!(ticket.is_assigned_to("U1"));
    assert!(!ticket.is_assigned_to("U2"));
}
