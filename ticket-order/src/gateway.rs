use ticket_core::{SeatReservationService, TicketPaymentService};

/// Payment gateway stand-in that only records the charge in the log
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: i64, total_amount_to_pay: u32) {
        tracing::info!(account_id, total_amount_to_pay, "Payment taken");
    }
}

/// Seat booking stand-in that only records the reservation in the log
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: i64, total_seats_to_allocate: u32) {
        tracing::info!(account_id, total_seats_to_allocate, "Seats reserved");
    }
}
