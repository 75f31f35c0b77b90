use std::sync::Arc;

use ticket_catalog::{PurchaseSummary, TicketPricing};
use ticket_core::{
    InvalidPurchaseError, PurchaseResult, SeatReservationService, TicketPaymentService,
    TicketTypeRequest,
};

use crate::app_config::BusinessRules;
use crate::rules::PurchaseRules;

pub trait TicketService: Send + Sync {
    /// Validate the requests, then charge the account and reserve its seats.
    ///
    /// Nothing is charged or reserved unless every rule passes.
    fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<()>;
}

/// Validates ticket purchases and hands the totals to the payment and
/// seat reservation services
pub struct TicketServiceImpl {
    payment: Arc<dyn TicketPaymentService>,
    reservation: Arc<dyn SeatReservationService>,
    pricing: TicketPricing,
    rules: PurchaseRules,
}

impl TicketServiceImpl {
    pub fn new(
        payment: Arc<dyn TicketPaymentService>,
        reservation: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            payment,
            reservation,
            pricing: TicketPricing::default(),
            rules: PurchaseRules::default(),
        }
    }

    pub fn from_config(
        business_rules: &BusinessRules,
        payment: Arc<dyn TicketPaymentService>,
        reservation: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self::new(payment, reservation)
            .with_rules(business_rules.pricing(), business_rules.purchase_rules())
    }

    pub fn with_rules(mut self, pricing: TicketPricing, rules: PurchaseRules) -> Self {
        self.pricing = pricing;
        self.rules = rules;
        self
    }

    /// Price the requests and check the ticket rules without touching any account
    pub fn quote(&self, requests: &[TicketTypeRequest]) -> PurchaseResult<PurchaseSummary> {
        self.priced(requests).map(|priced| priced.summary)
    }

    fn priced(&self, requests: &[TicketTypeRequest]) -> PurchaseResult<PricedPurchase> {
        let summary = PurchaseSummary::tally(&self.pricing, requests);
        tracing::debug!(?summary, "Tallied ticket requests");

        self.rules.validate_tickets(&summary)?;
        PricedPurchase::new(summary)
    }
}

impl TicketService for TicketServiceImpl {
    fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<()> {
        let outcome = self.priced(requests).and_then(|priced| {
            self.rules.validate_account(account_id)?;
            Ok(priced)
        });

        let PricedPurchase { total_amount, total_seats, .. } = match outcome {
            Ok(priced) => priced,
            Err(err) => {
                tracing::warn!(account_id, reason = %err, "Ticket purchase rejected");
                return Err(err);
            }
        };

        self.payment.make_payment(account_id, total_amount);
        self.reservation.reserve_seat(account_id, total_seats);

        tracing::info!(account_id, total_amount, total_seats, "Ticket purchase completed");
        Ok(())
    }
}

/// A validated summary with its totals in the units the external services accept
struct PricedPurchase {
    summary: PurchaseSummary,
    total_amount: u32,
    total_seats: u32,
}

impl PricedPurchase {
    fn new(summary: PurchaseSummary) -> PurchaseResult<Self> {
        let total_amount = u32::try_from(summary.total_amount)
            .map_err(|_| InvalidPurchaseError::AmountOverflow)?;
        let total_seats = u32::try_from(summary.seats_to_reserve())
            .map_err(|_| InvalidPurchaseError::AmountOverflow)?;

        Ok(Self { summary, total_amount, total_seats })
    }
}
