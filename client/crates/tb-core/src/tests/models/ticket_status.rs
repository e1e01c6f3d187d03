use crate::TicketStatus;

use std::str::FromStr;

use proptest::prelude::*;

#[test]
fn test_ticket_status_as_str() {
    assert_eq!(TicketStatus::Open.as_str(), "open");
    assert_eq!(TicketStatus::ToDo.as_str(), "to_do");
    assert_eq!(TicketStatus::InProgress.as_str(), "in_progress");
    assert_eq!(TicketStatus::Done.as_str(), "done");
}

#[test]
fn test_ticket_status_display_names() {
    let names: Vec<_> = TicketStatus::ALL.iter().map(|s| s.display_name()).collect();
    assert_eq!(names, vec!["Open", "To Do", "In Progress", "Done"]);
}

#[test]
fn test_ticket_status_from_str_ignores_case() {
    assert_eq!(
        TicketStatus::from_str("IN_PROGRESS").unwrap(),
        TicketStatus::InProgress
    );
    assert_eq!(TicketStatus::from_str("Done").unwrap(), TicketStatus::Done);
    assert!(TicketStatus::from_str("blocked").is_err());
}

#[test]
fn test_ticket_status_bucket_falls_back_to_open() {
    assert_eq!(TicketStatus::bucket("To_Do"), TicketStatus::ToDo);
    assert_eq!(TicketStatus::bucket("In Progress"), TicketStatus::Open);
    assert_eq!(TicketStatus::bucket(""), TicketStatus::Open);
}

#[test]
fn test_ticket_status_bucket_keeps_padded_key_out_of_its_column() {
    assert_eq!(TicketStatus::bucket(" done "), TicketStatus::Open);
    assert_eq!(TicketStatus::from_key("done\n"), None);
}

#[test]
fn test_ticket_status_serde_uses_keys() {
    let json = serde_json::to_string(&TicketStatus::ToDo).unwrap();
    assert_eq!(json, "\"to_do\"");

    let parsed: TicketStatus = serde_json::from_str("\"in_progress\"").unwrap();
    assert_eq!(parsed, TicketStatus::InProgress);
}

proptest! {
    #[test]
    fn given_known_key_in_any_case_when_bucketed_then_matches(
        status in prop::sample::select(TicketStatus::ALL.to_vec()),
        upper in any::<bool>(),
    ) {
        let key = if upper {
            status.as_str().to_uppercase()
        } else {
            status.as_str().to_string()
        };
        prop_assert_eq!(TicketStatus::bucket(&key), status);
    }

    #[test]
    fn given_unknown_key_when_bucketed_then_open(key in "[a-z ]{1,12}") {
        prop_assume!(TicketStatus::from_key(&key).is_none());
        prop_assert_eq!(TicketStatus::bucket(&key), TicketStatus::Open);
    }
}
