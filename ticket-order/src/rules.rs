use ticket_catalog::PurchaseSummary;
use ticket_core::{InvalidPurchaseError, PurchaseResult};

/// Business rules a purchase must satisfy before anything is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseRules {
    /// Most seat tickets (adult + child) allowed in a single purchase, inclusive
    pub max_tickets: u32,
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self { max_tickets: 20 }
    }
}

impl PurchaseRules {
    pub fn new(max_tickets: u32) -> Self {
        Self { max_tickets }
    }

    /// Ticket composition checks, in order: quantity, then adult supervision.
    ///
    /// An empty purchase passes both.
    pub fn validate_tickets(&self, summary: &PurchaseSummary) -> PurchaseResult<()> {
        if summary.total_seat_tickets > u64::from(self.max_tickets) {
            return Err(InvalidPurchaseError::TooManyTickets { max: self.max_tickets });
        }

        if !summary.is_empty() && summary.adult_tickets == 0 {
            return Err(InvalidPurchaseError::AdultRequired);
        }

        Ok(())
    }

    pub fn validate_account(&self, account_id: i64) -> PurchaseResult<()> {
        if account_id < 1 {
            return Err(InvalidPurchaseError::InvalidAccount);
        }
        Ok(())
    }
}
