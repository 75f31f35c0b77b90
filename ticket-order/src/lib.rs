pub mod app_config;
pub mod gateway;
pub mod rules;
pub mod service;

pub use app_config::{BusinessRules, Config};
pub use gateway::{LoggingPaymentService, LoggingSeatReservationService};
pub use rules::PurchaseRules;
pub use service::{TicketService, TicketServiceImpl};
