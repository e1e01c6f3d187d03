use tb_core::{Ticket, TicketStatus};

/// One status lane of the board, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub status: TicketStatus,
    pub tickets: Vec<Ticket>,
}

impl Column {
    pub fn new(status: TicketStatus) -> Self {
        Self {
            status,
            tickets: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.status.display_name()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn position(&self, ticket_id: &str) -> Option<usize> {
        self.tickets.iter().position(|t| t.id == ticket_id)
    }
}
