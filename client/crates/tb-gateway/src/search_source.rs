use crate::{Client, GatewayResult};

use std::sync::Arc;

use async_trait::async_trait;
use tb_core::{Project, Ticket};

/// A collection that can be listed in full or filtered by a search key.
#[async_trait]
pub trait SearchSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    /// The unfiltered collection, used for an empty query
    async fn list_all(&self) -> GatewayResult<Vec<Self::Item>>;

    async fn search(&self, key: &str) -> GatewayResult<Vec<Self::Item>>;
}

/// Tickets via `/ticket` and `/search-ticket/:key`
#[derive(Clone)]
pub struct TicketSearch {
    client: Arc<Client>,
}

impl TicketSearch {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchSource for TicketSearch {
    type Item = Ticket;

    async fn list_all(&self) -> GatewayResult<Vec<Ticket>> {
        self.client.list_tickets().await
    }

    async fn search(&self, key: &str) -> GatewayResult<Vec<Ticket>> {
        self.client.search_tickets(key).await
    }
}

/// Projects via `/project` and `/search-project/:key`
#[derive(Clone)]
pub struct ProjectSearch {
    client: Arc<Client>,
}

impl ProjectSearch {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchSource for ProjectSearch {
    type Item = Project;

    async fn list_all(&self) -> GatewayResult<Vec<Project>> {
        self.client.list_projects().await
    }

    async fn search(&self, key: &str) -> GatewayResult<Vec<Project>> {
        self.client.search_projects(key).await
    }
}
