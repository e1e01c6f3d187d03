use crate::board::unconfirmed::{Placement, Settled, Unconfirmed};
use crate::{BoardError, BoardResult, BoardSnapshot, BoardState, Notification, Notifier};

use std::sync::Arc;

use log::{debug, info, warn};
use tb_config::BoardConfig;
use tb_core::TicketStatus;
use tb_gateway::{TicketGateway, TicketScope};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Notification raised when a status change could not be saved
pub const STATUS_UPDATE_FAILED: &str = "Failed to update ticket status. Please refresh.";

/// How a cross-column move ended on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persisted {
    Saved,
    /// The board keeps the optimistic state
    Failed { message: String },
    /// The ticket was put back where the server last had it
    RolledBack { message: String },
}

/// Result of [`Board::move_ticket`].
#[derive(Debug)]
pub struct MoveOutcome {
    /// Board as published once the move was applied
    pub snapshot: Arc<BoardSnapshot>,
    /// Background save, present only when the ticket changed column
    pub persistence: Option<JoinHandle<Persisted>>,
}

impl MoveOutcome {
    fn unchanged(snapshot: Arc<BoardSnapshot>) -> Self {
        Self {
            snapshot,
            persistence: None,
        }
    }
}

/// Columnar ticket board with optimistic drag-and-drop moves.
///
/// Every state change is published on a watch channel; success and failure
/// messages go to the notification stream returned by [`Board::new`].
pub struct Board<G: TicketGateway> {
    gateway: Arc<G>,
    scope: TicketScope,
    rollback_on_failure: bool,
    state: Arc<watch::Sender<BoardState>>,
    notifier: Notifier,
    unconfirmed: Arc<Unconfirmed>,
}

impl<G: TicketGateway> Board<G> {
    pub fn new(
        gateway: Arc<G>,
        config: &BoardConfig,
    ) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (notifier, notifications) = Notifier::channel();
        let (state, _) = watch::channel(BoardState::Loading);

        let board = Self {
            gateway,
            scope: TicketScope::All,
            rollback_on_failure: config.rollback_on_failure,
            state: Arc::new(state),
            notifier,
            unconfirmed: Arc::new(Unconfirmed::default()),
        };
        (board, notifications)
    }

    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> BoardState {
        self.state.borrow().clone()
    }

    pub fn scope(&self) -> &TicketScope {
        &self.scope
    }

    /// Fetch the tickets in scope and rebuild the columns.
    pub async fn load(&mut self) -> BoardState {
        self.state.send_replace(BoardState::Loading);
        self.unconfirmed.clear();

        let next = match self.gateway.load_tickets(&self.scope).await {
            Ok(tickets) => {
                let snapshot = BoardSnapshot::partition(tickets);
                info!("Board loaded with {} tickets", snapshot.ticket_count());
                BoardState::Ready(Arc::new(snapshot))
            }
            Err(err) => {
                let message = err.user_message();
                warn!("Board load failed: {err}");
                self.notifier.error(message.clone());
                BoardState::Failed { message }
            }
        };

        self.state.send_replace(next.clone());
        next
    }

    /// Load again after a failure
    pub async fn retry(&mut self) -> BoardState {
        debug!("Retrying board load");
        self.load().await
    }

    /// Switch to one project's tickets and load them.
    pub async fn load_project(&mut self, project_id: impl Into<String>) -> BoardState {
        self.scope = TicketScope::Project(project_id.into());
        self.load().await
    }

    /// Apply a drag result.
    ///
    /// `dest_column` of `None` is a cancelled drag. The new snapshot is
    /// published before this returns; a column change is then saved in the
    /// background.
    pub fn move_ticket(
        &mut self,
        ticket_id: &str,
        source_column: &str,
        source_index: usize,
        dest_column: Option<&str>,
        dest_index: usize,
    ) -> BoardResult<MoveOutcome> {
        let current = self
            .state
            .borrow()
            .snapshot()
            .cloned()
            .ok_or_else(BoardError::not_ready)?;

        let Some(dest_column) = dest_column else {
            return Ok(MoveOutcome::unchanged(current));
        };

        let source = parse_column(source_column)?;
        let dest = parse_column(dest_column)?;

        let Some(ticket) = current
            .column(source)
            .tickets
            .get(source_index)
            .filter(|t| t.id == ticket_id)
        else {
            return Err(BoardError::ticket_not_at(ticket_id, source, source_index));
        };
        let before = Placement {
            column: source,
            index: source_index,
            ticket: ticket.clone(),
        };
        let dest_len = current.column(dest).len();

        if source == dest && source_index == dest_index {
            return Ok(MoveOutcome::unchanged(current));
        }

        let snapshot = Arc::new(current.moved(source, source_index, dest, dest_index));
        self.state.send_replace(BoardState::Ready(snapshot.clone()));

        if source == dest {
            debug!("Reordered {ticket_id} within {source} (not saved)");
            return Ok(MoveOutcome {
                snapshot,
                persistence: None,
            });
        }

        debug!("Moved {ticket_id} from {source} to {dest}");
        let mut after = before.clone();
        after.column = dest;
        after.index = dest_index.min(dest_len);
        after.ticket.set_status(dest);
        let persistence = self.persist(before, after);

        Ok(MoveOutcome {
            snapshot,
            persistence: Some(persistence),
        })
    }

    fn persist(&self, before: Placement, after: Placement) -> JoinHandle<Persisted> {
        let gateway = self.gateway.clone();
        let state = self.state.clone();
        let notifier = self.notifier.clone();
        let unconfirmed = self.unconfirmed.clone();
        let rollback = self.rollback_on_failure;
        let move_id = unconfirmed.begin(before);

        tokio::spawn(async move {
            let ticket_id = after.ticket.id.clone();
            let dest = after.column;

            let err = match gateway.persist_status(&ticket_id, dest).await {
                Ok(()) => {
                    notifier.success(format!(
                        "Ticket \"{}\" moved to {}!",
                        after.ticket.title,
                        dest.display_name()
                    ));
                    unconfirmed.finish(&ticket_id, move_id, Some(after));
                    return Persisted::Saved;
                }
                Err(err) => err,
            };

            warn!("Status update for {ticket_id} failed: {err}");
            notifier.error(STATUS_UPDATE_FAILED);
            let message = err.user_message();

            match unconfirmed.finish(&ticket_id, move_id, None) {
                Settled::Rejected(placement) if rollback && restore(&state, &placement) => {
                    info!("Moved {ticket_id} back to {}", placement.column);
                    Persisted::RolledBack { message }
                }
                _ => Persisted::Failed { message },
            }
        })
    }
}

/// Put a ticket back where the server last had it.
fn restore(state: &watch::Sender<BoardState>, placement: &Placement) -> bool {
    state.send_if_modified(|current| {
        let Some(restored) = current.snapshot().and_then(|s| s.restored(placement)) else {
            return false;
        };
        *current = BoardState::Ready(Arc::new(restored));
        true
    })
}

#[track_caller]
fn parse_column(key: &str) -> BoardResult<TicketStatus> {
    TicketStatus::from_key(key).ok_or_else(|| BoardError::unknown_column(key))
}

impl<G: TicketGateway> std::fmt::Debug for Board<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("scope", &self.scope)
            .field("rollback_on_failure", &self.rollback_on_failure)
            .field("state", &*self.state.borrow())
            .finish()
    }
}
