/// Third-party payment gateway.
///
/// Payments are assumed to always succeed; the gateway has no error contract.
pub trait TicketPaymentService: Send + Sync {
    /// Charge `total_amount_to_pay` to the given account
    fn make_payment(&self, account_id: i64, total_amount_to_pay: u32);
}
