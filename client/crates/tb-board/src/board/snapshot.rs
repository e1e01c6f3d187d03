use crate::Column;
use crate::board::unconfirmed::Placement;

use tb_core::{Ticket, TicketStatus};

/// Immutable columnar view of the fetched tickets.
///
/// Holds exactly one column per [`TicketStatus`], in [`TicketStatus::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    columns: [Column; 4],
}

impl BoardSnapshot {
    /// Place every ticket into the column matching its status, keeping fetch
    /// order within a column. Unrecognized statuses go to the fallback column.
    pub fn partition(tickets: impl IntoIterator<Item = Ticket>) -> Self {
        let mut columns = TicketStatus::ALL.map(Column::new);
        for ticket in tickets {
            columns[slot(ticket.status_bucket())].tickets.push(ticket);
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, status: TicketStatus) -> &Column {
        &self.columns[slot(status)]
    }

    pub fn ticket_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Column and index currently holding `ticket_id`
    pub fn find(&self, ticket_id: &str) -> Option<(TicketStatus, usize)> {
        self.columns
            .iter()
            .find_map(|c| c.position(ticket_id).map(|i| (c.status, i)))
    }

    /// Copy with the ticket at `source[source_index]` moved to `dest[dest_index]`.
    ///
    /// `dest_index` is clamped to the destination length. The ticket always
    /// takes the destination key as its status, a reorder included.
    pub(crate) fn moved(
        &self,
        source: TicketStatus,
        source_index: usize,
        dest: TicketStatus,
        dest_index: usize,
    ) -> Self {
        let mut next = self.clone();
        let mut ticket = next.columns[slot(source)].tickets.remove(source_index);
        ticket.set_status(dest);
        let lane = &mut next.columns[slot(dest)].tickets;
        lane.insert(dest_index.min(lane.len()), ticket);
        next
    }

    /// Put `placement.ticket` back as recorded, wherever it is now.
    ///
    /// `None` if the ticket is no longer on the board.
    pub(crate) fn restored(&self, placement: &Placement) -> Option<Self> {
        let (column, index) = self.find(&placement.ticket.id)?;
        let mut next = self.clone();
        next.columns[slot(column)].tickets.remove(index);
        let lane = &mut next.columns[slot(placement.column)].tickets;
        lane.insert(placement.index.min(lane.len()), placement.ticket.clone());
        Some(next)
    }
}

fn slot(status: TicketStatus) -> usize {
    status as usize
}
