use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gatepass_auth::PrincipalId;
use gatepass_core::{EventId, TicketId};
use gatepass_events::Notification;

/// Notifications emitted alongside committed mutations.
///
/// Fire-and-forget: publish failures are logged and never fail the
/// operation they describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerNotification {
    EventCreated {
        event_id: EventId,
        name: String,
        organizer: PrincipalId,
        ticket_price: u64,
        max_tickets: u32,
        occurred_at: DateTime<Utc>,
    },
    TicketPurchased {
        token_id: TicketId,
        event_id: EventId,
        buyer: PrincipalId,
        amount_paid: u64,
        occurred_at: DateTime<Utc>,
    },
    TicketUsed {
        token_id: TicketId,
        event_id: EventId,
        occurred_at: DateTime<Utc>,
    },
}

impl Notification for LedgerNotification {
    fn kind(&self) -> &'static str {
        match self {
            LedgerNotification::EventCreated { .. } => "event.created",
            LedgerNotification::TicketPurchased { .. } => "ticket.purchased",
            LedgerNotification::TicketUsed { .. } => "ticket.used",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            LedgerNotification::EventCreated { occurred_at, .. }
            | LedgerNotification::TicketPurchased { occurred_at, .. }
            | LedgerNotification::TicketUsed { occurred_at, .. } => *occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable_identifiers() {
        let now = Utc::now();
        let created = LedgerNotification::EventCreated {
            event_id: EventId::from_raw(1),
            name: "n".to_string(),
            organizer: PrincipalId::new(),
            ticket_price: 10,
            max_tickets: 5,
            occurred_at: now,
        };
        let used = LedgerNotification::TicketUsed {
            token_id: TicketId::from_raw(1),
            event_id: EventId::from_raw(1),
            occurred_at: now,
        };

        assert_eq!(created.kind(), "event.created");
        assert_eq!(used.kind(), "ticket.used");
        assert_eq!(created.occurred_at(), now);
    }
}
