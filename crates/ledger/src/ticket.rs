use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gatepass_auth::PrincipalId;
use gatepass_core::{EventId, TicketId};

/// A minted ticket.
///
/// `owner` is fixed at mint time (no transfer surface); `is_used` is the
/// only mutable field and flips false→true exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub token_id: TicketId,
    pub event_id: EventId,
    pub owner: PrincipalId,
    pub is_used: bool,
    pub purchase_date: DateTime<Utc>,
    /// Opaque per-ticket metadata supplied at purchase.
    pub token_uri: String,
}

impl Ticket {
    pub fn mint(
        token_id: TicketId,
        event_id: EventId,
        owner: PrincipalId,
        purchase_date: DateTime<Utc>,
        token_uri: impl Into<String>,
    ) -> Self {
        Self {
            token_id,
            event_id,
            owner,
            is_used: false,
            purchase_date,
            token_uri: token_uri.into(),
        }
    }
}
