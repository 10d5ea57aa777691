use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gatepass_auth::PrincipalId;
use gatepass_core::{EventId, LedgerError, LedgerResult};

/// Parameters for creating an event (everything but the allocated id and
/// the organizer, which the ledger supplies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub venue: String,
    pub event_date: DateTime<Utc>,
    /// Price in smallest currency unit (e.g., cents).
    pub ticket_price: u64,
    pub max_tickets: u32,
    /// Opaque blob for off-ledger metadata; never interpreted here.
    pub metadata_uri: String,
}

impl NewEvent {
    /// Validate creation preconditions against the current time.
    pub fn validate(&self, now: DateTime<Utc>) -> LedgerResult<()> {
        if self.event_date <= now {
            return Err(LedgerError::validation("event date must be in the future"));
        }
        if self.max_tickets == 0 {
            return Err(LedgerError::validation("max tickets must be positive"));
        }
        if self.name.trim().is_empty() {
            return Err(LedgerError::validation("name must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(LedgerError::validation("description must not be empty"));
        }
        if self.venue.trim().is_empty() {
            return Err(LedgerError::validation("venue must not be empty"));
        }
        Ok(())
    }
}

/// A ticketable event.
///
/// Everything but `sold_tickets` is immutable after creation; `sold_tickets`
/// only grows, and never past `max_tickets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub venue: String,
    pub event_date: DateTime<Utc>,
    pub ticket_price: u64,
    pub max_tickets: u32,
    pub sold_tickets: u32,
    pub organizer: PrincipalId,
    /// Set at creation; no deactivation path exists, but the purchase path
    /// still checks it so one can be added without reordering preconditions.
    pub is_active: bool,
    pub metadata_uri: String,
}

impl EventRecord {
    /// Commit a validated [`NewEvent`] under an allocated id.
    pub fn create(id: EventId, organizer: PrincipalId, new_event: NewEvent) -> Self {
        Self {
            id,
            name: new_event.name,
            description: new_event.description,
            venue: new_event.venue,
            event_date: new_event.event_date,
            ticket_price: new_event.ticket_price,
            max_tickets: new_event.max_tickets,
            sold_tickets: 0,
            organizer,
            is_active: true,
            metadata_uri: new_event.metadata_uri,
        }
    }

    pub fn has_capacity(&self) -> bool {
        self.sold_tickets < self.max_tickets
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        now < self.event_date
    }
}
