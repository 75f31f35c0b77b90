pub mod pricing;
pub mod summary;

pub use pricing::TicketPricing;
pub use summary::PurchaseSummary;
