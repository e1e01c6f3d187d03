//! Unit tests for the board crate, with in-memory gateways.

mod board;

use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, OnceLock};

use tb_core::{Ticket, TicketStatus};
use tb_gateway::{GatewayError, GatewayResult, SearchSource, TicketGateway, TicketScope};
use tokio::sync::watch;

use crate::BoardState;

pub(crate) fn ticket(id: &str, status: &str) -> Ticket {
    let mut ticket = Ticket::new(id, format!("Ticket {id}"), TicketStatus::Open);
    ticket.status = status.to_string();
    ticket
}

/// Canned responses for one `load_tickets` call
pub(crate) enum Load {
    Tickets(Vec<Ticket>),
    Fail(&'static str),
}

/// Gateway double: scripted loads, per-ticket status failures, call log.
#[derive(Default)]
pub(crate) struct FakeGateway {
    loads: Mutex<VecDeque<Load>>,
    failing: Mutex<HashSet<String>>,
    pub status_calls: Mutex<Vec<(String, TicketStatus)>>,
    pub scopes: Mutex<Vec<TicketScope>>,
    /// Board state seen at each fetch
    pub seen_at_fetch: Mutex<Vec<BoardState>>,
    observer: OnceLock<watch::Receiver<BoardState>>,
}

impl FakeGateway {
    pub fn with_loads(loads: impl IntoIterator<Item = Load>) -> Self {
        Self {
            loads: Mutex::new(loads.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn fail_status_for(&self, ticket_id: &str) {
        self.failing.lock().unwrap().insert(ticket_id.to_string());
    }

    pub fn observe(&self, rx: watch::Receiver<BoardState>) {
        let _ = self.observer.set(rx);
    }

    pub fn status_calls(&self) -> Vec<(String, TicketStatus)> {
        self.status_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TicketGateway for FakeGateway {
    async fn load_tickets(&self, scope: &TicketScope) -> GatewayResult<Vec<Ticket>> {
        self.scopes.lock().unwrap().push(scope.clone());
        if let Some(rx) = self.observer.get() {
            self.seen_at_fetch.lock().unwrap().push(rx.borrow().clone());
        }
        match self.loads.lock().unwrap().pop_front() {
            Some(Load::Tickets(tickets)) => Ok(tickets),
            Some(Load::Fail(message)) => Err(GatewayError::api(500, message)),
            None => Ok(Vec::new()),
        }
    }

    async fn persist_status(&self, ticket_id: &str, status: TicketStatus) -> GatewayResult<()> {
        self.status_calls
            .lock()
            .unwrap()
            .push((ticket_id.to_string(), status));
        if self.failing.lock().unwrap().contains(ticket_id) {
            return Err(GatewayError::api(500, "Internal Server Error"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Search(String),
}

/// Search source double returning `"<query>-hit"` for every search.
#[derive(Default)]
pub(crate) struct FakeSource {
    pub calls: Mutex<Vec<Call>>,
    pub failing: Mutex<bool>,
}

impl FakeSource {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    fn outcome(&self, items: Vec<String>) -> GatewayResult<Vec<String>> {
        if *self.failing.lock().unwrap() {
            return Err(GatewayError::data_shape("Search failed."));
        }
        Ok(items)
    }
}

#[async_trait]
impl SearchSource for FakeSource {
    type Item = String;

    async fn list_all(&self) -> GatewayResult<Vec<String>> {
        self.calls.lock().unwrap().push(Call::List);
        self.outcome(vec!["all".to_string()])
    }

    async fn search(&self, key: &str) -> GatewayResult<Vec<String>> {
        self.calls.lock().unwrap().push(Call::Search(key.to_string()));
        self.outcome(vec![format!("{key}-hit")])
    }
}
