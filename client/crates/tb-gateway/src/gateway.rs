use crate::{Client, GatewayResult};

use async_trait::async_trait;
use tb_core::{Ticket, TicketStatus};

/// Which tickets a board shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TicketScope {
    #[default]
    All,
    Project(String),
}

/// The slice of the API a board needs: fetch its tickets, persist a status.
#[async_trait]
pub trait TicketGateway: Send + Sync + 'static {
    async fn load_tickets(&self, scope: &TicketScope) -> GatewayResult<Vec<Ticket>>;

    async fn persist_status(&self, ticket_id: &str, status: TicketStatus) -> GatewayResult<()>;
}

#[async_trait]
impl TicketGateway for Client {
    async fn load_tickets(&self, scope: &TicketScope) -> GatewayResult<Vec<Ticket>> {
        match scope {
            TicketScope::All => self.list_tickets().await,
            TicketScope::Project(project_id) => self.project_tickets(project_id).await,
        }
    }

    async fn persist_status(&self, ticket_id: &str, status: TicketStatus) -> GatewayResult<()> {
        self.update_ticket_status(ticket_id, status).await
    }
}
