use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tb_core::{Ticket, TicketStatus};

/// A ticket as the server last accepted it, and where it sat on the board.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Placement {
    pub column: TicketStatus,
    pub index: usize,
    pub ticket: Ticket,
}

/// What a finished save means for its ticket.
#[derive(Debug, PartialEq)]
pub(crate) enum Settled {
    /// Other saves for the ticket are still out
    Outstanding,
    /// Every save is back and the latest one went through
    Confirmed,
    /// Every save is back and the latest one failed
    Rejected(Placement),
    /// The board was reloaded since the move
    Forgotten,
}

#[derive(Debug)]
struct Entry {
    placement: Placement,
    latest: u64,
    in_flight: usize,
    latest_failed: bool,
}

#[derive(Debug, Default)]
struct Ledger {
    entries: HashMap<String, Entry>,
    next_move: u64,
}

/// Cross-column moves whose saves have not all come back, keyed by ticket.
///
/// The first unconfirmed move records the ticket as it was (raw status
/// included); a later move of the same ticket keeps that record.
#[derive(Debug, Default)]
pub(crate) struct Unconfirmed {
    ledger: Mutex<Ledger>,
}

impl Unconfirmed {
    /// Register a move of `before.ticket`. Returns the id passed to [`Unconfirmed::finish`].
    pub fn begin(&self, before: Placement) -> u64 {
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        ledger.next_move += 1;
        let move_id = ledger.next_move;

        let entry = ledger
            .entries
            .entry(before.ticket.id.clone())
            .or_insert_with(|| Entry {
                placement: before,
                latest: move_id,
                in_flight: 0,
                latest_failed: false,
            });
        entry.latest = move_id;
        entry.in_flight += 1;
        entry.latest_failed = false;
        move_id
    }

    /// Record the answer to one save. `saved` is where the server now has the
    /// ticket, or `None` if the save failed.
    pub fn finish(&self, ticket_id: &str, move_id: u64, saved: Option<Placement>) -> Settled {
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(entry) = ledger.entries.get_mut(ticket_id) else {
            return Settled::Forgotten;
        };

        entry.in_flight = entry.in_flight.saturating_sub(1);
        if move_id == entry.latest {
            entry.latest_failed = saved.is_none();
        }
        if let Some(saved) = saved {
            entry.placement = saved;
        }
        if entry.in_flight > 0 {
            return Settled::Outstanding;
        }

        match ledger.entries.remove(ticket_id) {
            Some(entry) if entry.latest_failed => Settled::Rejected(entry.placement),
            Some(_) => Settled::Confirmed,
            None => Settled::Forgotten,
        }
    }

    /// Drop every record; the board now shows server state.
    pub fn clear(&self) {
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clear();
    }
}
