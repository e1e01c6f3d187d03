//! JSON shapes for values that have no wire representation of their own.

use tb_board::{BoardSnapshot, Notification, NotificationLevel, Persisted, SearchState};

use serde::Serialize;
use serde_json::{Value, json};

pub fn board(snapshot: &BoardSnapshot) -> Value {
    let columns: Vec<Value> = snapshot
        .columns()
        .iter()
        .map(|column| {
            json!({
                "key": column.status.as_str(),
                "name": column.name(),
                "tickets": column.tickets,
            })
        })
        .collect();
    json!({ "columns": columns })
}

pub fn notification(note: &Notification) -> Value {
    let level = match note.level {
        NotificationLevel::Success => "success",
        NotificationLevel::Error => "error",
    };
    json!({ "level": level, "message": note.message })
}

pub fn persisted(outcome: Option<&Persisted>) -> Value {
    match outcome {
        None => json!({ "result": "local" }),
        Some(Persisted::Saved) => json!({ "result": "saved" }),
        Some(Persisted::Failed { message }) => json!({ "result": "failed", "message": message }),
        Some(Persisted::RolledBack { message }) => {
            json!({ "result": "rolled_back", "message": message })
        }
    }
}

/// One line of `find` output, `None` for states that are not shown
pub fn search_state<T: Serialize>(state: &SearchState<T>) -> Option<Value> {
    match state {
        SearchState::Results { query, items } => Some(json!({ "query": query, "items": items })),
        SearchState::Failed { query, message } => {
            Some(json!({ "query": query, "error": message, "items": [] }))
        }
        SearchState::Idle | SearchState::Loading { .. } => None,
    }
}
