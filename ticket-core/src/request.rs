use serde::{Deserialize, Serialize};

use crate::InvalidPurchaseError;

/// Ticket types sold by the booking service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// Infants sit on an adult's lap and are not allocated a seat.
    pub fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

/// Immutable request for a number of tickets of one type.
///
/// The count is checked on construction (and on deserialization), so any
/// value of this type holds at least one ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawTicketTypeRequest")]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    #[serde(rename = "count")]
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: i32) -> Result<Self, InvalidPurchaseError> {
        if no_of_tickets < 1 {
            return Err(InvalidPurchaseError::TicketCountBelowOne);
        }

        Ok(Self {
            ticket_type,
            no_of_tickets: no_of_tickets.unsigned_abs(),
        })
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

#[derive(Deserialize)]
struct RawTicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    count: i32,
}

impl TryFrom<RawTicketTypeRequest> for TicketTypeRequest {
    type Error = InvalidPurchaseError;

    fn try_from(raw: RawTicketTypeRequest) -> Result<Self, Self::Error> {
        TicketTypeRequest::new(raw.ticket_type, raw.count)
    }
}
