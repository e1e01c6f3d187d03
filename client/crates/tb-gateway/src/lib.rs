//! HTTP gateway to the ticket API, plus the persisted login session.

pub(crate) mod auth_response;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod gateway;
pub(crate) mod search_source;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use client::Client;
pub use error::{GatewayError, NO_RESPONSE_MESSAGE, Result as GatewayResult};
pub use gateway::{TicketGateway, TicketScope};
pub use search_source::{ProjectSearch, SearchSource, TicketSearch};
pub use session::{
    Session, SessionContext, SessionError, SessionLoad, SessionResult, SessionStore,
};
