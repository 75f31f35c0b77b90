pub mod payment;
pub mod reservation;
pub mod request;

pub use payment::TicketPaymentService;
pub use request::{TicketType, TicketTypeRequest};
pub use reservation::SeatReservationService;

/// Every way a purchase can be refused.
///
/// There is a single error kind for callers; the variants only exist so the
/// rule that failed can be matched on without comparing strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPurchaseError {
    #[error("Number of tickets cannot be less than 1")]
    TicketCountBelowOne,
    #[error("Cannot purchase more than {max} tickets at a time")]
    TooManyTickets { max: u32 },
    #[error("Child and infant tickets cannot be purchased without purchasing an Adult ticket")]
    AdultRequired,
    #[error("Invalid account id")]
    InvalidAccount,
    #[error("Ticket total exceeds the supported amount")]
    AmountOverflow,
}

impl InvalidPurchaseError {
    /// Human-readable reason, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type PurchaseResult<T> = Result<T, InvalidPurchaseError>;
