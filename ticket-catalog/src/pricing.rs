use ticket_core::TicketType;

/// Unit price per ticket type, in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketPricing {
    pub adult_price: u32,
    pub child_price: u32,
    /// Infants travel free unless configured otherwise
    pub infant_price: u32,
}

impl Default for TicketPricing {
    fn default() -> Self {
        Self {
            adult_price: 20,
            child_price: 10,
            infant_price: 0,
        }
    }
}

impl TicketPricing {
    pub fn unit_price(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => self.infant_price,
        }
    }

    /// Price of `no_of_tickets` tickets of one type
    pub fn price_for(&self, ticket_type: TicketType, no_of_tickets: u32) -> u64 {
        u64::from(self.unit_price(ticket_type)) * u64::from(no_of_tickets)
    }
}
