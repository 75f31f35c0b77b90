use serde::Serialize;
use ticket_core::{TicketType, TicketTypeRequest};

use crate::pricing::TicketPricing;

/// Totals derived from a sequence of ticket requests.
///
/// Seat tickets are adult and child tickets; infants are counted separately
/// and never take a seat. Totals saturate instead of wrapping, so an absurd
/// request still compares as "too many" rather than as a small number.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct PurchaseSummary {
    pub total_seat_tickets: u64,
    pub adult_tickets: u64,
    pub child_tickets: u64,
    pub infant_tickets: u64,
    pub total_amount: u64,
}

impl PurchaseSummary {
    /// Accumulate counts and price across all requests, in any order
    pub fn tally(pricing: &TicketPricing, requests: &[TicketTypeRequest]) -> Self {
        let mut summary = Self::default();

        for request in requests {
            let ticket_type = request.ticket_type();
            let count = u64::from(request.no_of_tickets());

            let bucket = match ticket_type {
                TicketType::Adult => &mut summary.adult_tickets,
                TicketType::Child => &mut summary.child_tickets,
                TicketType::Infant => &mut summary.infant_tickets,
            };
            *bucket = bucket.saturating_add(count);

            if ticket_type.occupies_seat() {
                summary.total_seat_tickets = summary.total_seat_tickets.saturating_add(count);
            }

            summary.total_amount = summary
                .total_amount
                .saturating_add(pricing.price_for(ticket_type, request.no_of_tickets()));
        }

        summary
    }

    pub fn seats_to_reserve(&self) -> u64 {
        self.total_seat_tickets
    }

    pub fn is_empty(&self) -> bool {
        self.total_seat_tickets == 0 && self.infant_tickets == 0
    }
}
