use std::sync::Arc;

use anyhow::Context;
use ticket_core::{TicketType, TicketTypeRequest};
use ticket_order::{
    Config, LoggingPaymentService, LoggingSeatReservationService, TicketService,
    TicketServiceImpl,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticket_order=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(business_rules = ?config.business_rules, "Loaded business rules");

    let service = TicketServiceImpl::from_config(
        &config.business_rules,
        Arc::new(LoggingPaymentService),
        Arc::new(LoggingSeatReservationService),
    );

    let scenarios: [(&str, i64, &[(TicketType, i32)]); 5] = [
        (
            "family",
            1,
            &[(TicketType::Infant, 1), (TicketType::Child, 1), (TicketType::Adult, 1)],
        ),
        ("adults only", 1, &[(TicketType::Adult, 10)]),
        (
            "full party",
            1,
            &[(TicketType::Infant, 10), (TicketType::Child, 5), (TicketType::Adult, 15)],
        ),
        (
            "oversized party",
            1,
            &[(TicketType::Infant, 10), (TicketType::Child, 10), (TicketType::Adult, 11)],
        ),
        ("unaccompanied child", 1, &[(TicketType::Child, 1)]),
    ];

    for (name, account_id, tickets) in scenarios {
        let requests = tickets
            .iter()
            .map(|&(ticket_type, count)| TicketTypeRequest::new(ticket_type, count))
            .collect::<Result<Vec<_>, _>>()?;

        if let Ok(summary) = service.quote(&requests) {
            let quote = serde_json::to_string(&summary)?;
            tracing::info!(scenario = name, %quote, "Quoted");
        }

        match service.purchase_tickets(account_id, &requests) {
            Ok(()) => tracing::info!(scenario = name, "Purchased"),
            Err(err) => tracing::info!(scenario = name, reason = %err, "Refused"),
        }
    }

    Ok(())
}
