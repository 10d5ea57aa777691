//! The externally callable ledger surface.
//!
//! One `Mutex` guards all of the ledger's state (events, tickets, both
//! indices, both id sequences). Every mutating operation takes the lock,
//! validates, moves funds if it must, and only then mutates — so an
//! operation either commits fully or leaves no trace, and two racing
//! purchases of the last slot can never both pass the capacity check.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use gatepass_auth::{PrincipalId, ensure_organizer};
use gatepass_core::{Clock, EventId, IdSequence, LedgerError, LedgerResult, TicketId};
use gatepass_events::NotificationBus;

use crate::escrow::ValueTransfer;
use crate::event::{EventRecord, NewEvent};
use crate::notification::LedgerNotification;
use crate::ticket::Ticket;

/// All authoritative state plus the derived indices.
///
/// The indices are maintenance structures: they are updated in the same
/// critical section as the collections they mirror and are never consulted
/// to decide preconditions.
#[derive(Debug, Default)]
struct LedgerState {
    events: HashMap<EventId, EventRecord>,
    tickets: HashMap<TicketId, Ticket>,
    tickets_by_owner: HashMap<PrincipalId, Vec<TicketId>>,
    tickets_by_event: HashMap<EventId, Vec<TicketId>>,
    event_ids: IdSequence,
    ticket_ids: IdSequence,
}

/// The ticketing ledger facade.
///
/// Collaborators are seams: a [`Clock`] for date checks, a
/// [`ValueTransfer`] for payment forwarding, and a [`NotificationBus`]
/// for fire-and-forget observability signals.
pub struct TicketLedger<B>
where
    B: NotificationBus<LedgerNotification>,
{
    state: Mutex<LedgerState>,
    clock: Arc<dyn Clock>,
    escrow: Arc<dyn ValueTransfer>,
    bus: B,
}

impl<B> TicketLedger<B>
where
    B: NotificationBus<LedgerNotification>,
{
    pub fn new(clock: Arc<dyn Clock>, escrow: Arc<dyn ValueTransfer>, bus: B) -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
            clock,
            escrow,
            bus,
        }
    }

    fn lock_state(&self) -> LedgerResult<MutexGuard<'_, LedgerState>> {
        self.state
            .lock()
            .map_err(|_| LedgerError::internal("ledger state lock poisoned"))
    }

    /// Publish a notification; failures are logged, never propagated.
    fn notify(&self, notification: LedgerNotification) {
        if let Err(e) = self.bus.publish(notification) {
            tracing::warn!(error = ?e, "notification publish failed");
        }
    }

    /// Register a new event; the caller becomes its organizer.
    pub fn create_event(
        &self,
        organizer: PrincipalId,
        new_event: NewEvent,
    ) -> LedgerResult<EventId> {
        let mut state = self.lock_state()?;
        let now = self.clock.now();

        new_event.validate(now)?;

        let event_id = EventId::from_raw(state.event_ids.allocate());
        let record = EventRecord::create(event_id, organizer, new_event);

        let created = LedgerNotification::EventCreated {
            event_id,
            name: record.name.clone(),
            organizer,
            ticket_price: record.ticket_price,
            max_tickets: record.max_tickets,
            occurred_at: now,
        };
        state.events.insert(event_id, record);

        self.notify(created);
        tracing::info!(%event_id, %organizer, "event created");

        Ok(event_id)
    }

    /// Mint a ticket for `buyer` against `event_id`, forwarding the full
    /// `payment` (excess above the price included) to the organizer.
    ///
    /// Precondition order is part of the contract: existence, active flag,
    /// event date, capacity, payment. The transfer runs after all checks
    /// and before any mutation, so a transfer failure leaves no trace.
    pub fn purchase_ticket(
        &self,
        buyer: PrincipalId,
        event_id: EventId,
        token_uri: impl Into<String>,
        payment: u64,
    ) -> LedgerResult<TicketId> {
        let mut state = self.lock_state()?;
        let now = self.clock.now();

        let organizer = {
            let event = state.events.get(&event_id).ok_or(LedgerError::NotFound)?;
            if !event.is_active {
                return Err(LedgerError::EventInactiveOrElapsed);
            }
            if !event.is_upcoming(now) {
                return Err(LedgerError::EventInactiveOrElapsed);
            }
            if !event.has_capacity() {
                return Err(LedgerError::CapacityExceeded);
            }
            if payment < event.ticket_price {
                return Err(LedgerError::InsufficientPayment {
                    required: event.ticket_price,
                    offered: payment,
                });
            }
            event.organizer
        };

        self.escrow
            .transfer(buyer, organizer, payment)
            .map_err(|e| LedgerError::transfer_failed(e.to_string()))?;

        // Funds are with the organizer; everything below is infallible so
        // the mint and the capacity increment commit with them.
        let token_id = TicketId::from_raw(state.ticket_ids.allocate());
        let ticket = Ticket::mint(token_id, event_id, buyer, now, token_uri);

        state.tickets.insert(token_id, ticket);
        state.tickets_by_owner.entry(buyer).or_default().push(token_id);
        state
            .tickets_by_event
            .entry(event_id)
            .or_default()
            .push(token_id);
        if let Some(event) = state.events.get_mut(&event_id) {
            event.sold_tickets += 1;
        }

        self.notify(LedgerNotification::TicketPurchased {
            token_id,
            event_id,
            buyer,
            amount_paid: payment,
            occurred_at: now,
        });
        tracing::info!(%token_id, %event_id, %buyer, amount = payment, "ticket purchased");

        Ok(token_id)
    }

    /// Mark a ticket used. Only the organizer of the ticket's event may
    /// call this, and only once per ticket.
    pub fn use_ticket(&self, caller: PrincipalId, token_id: TicketId) -> LedgerResult<()> {
        let mut state = self.lock_state()?;
        let now = self.clock.now();

        let (event_id, organizer, is_used) = {
            let ticket = state.tickets.get(&token_id).ok_or(LedgerError::NotFound)?;
            let event = state
                .events
                .get(&ticket.event_id)
                .ok_or_else(|| LedgerError::internal("ticket references missing event"))?;
            (ticket.event_id, event.organizer, ticket.is_used)
        };

        ensure_organizer(caller, organizer)?;
        if is_used {
            return Err(LedgerError::AlreadyUsed);
        }

        if let Some(ticket) = state.tickets.get_mut(&token_id) {
            ticket.is_used = true;
        }

        self.notify(LedgerNotification::TicketUsed {
            token_id,
            event_id,
            occurred_at: now,
        });
        tracing::info!(%token_id, %event_id, "ticket used");

        Ok(())
    }

    pub fn get_event(&self, event_id: EventId) -> LedgerResult<EventRecord> {
        let state = self.lock_state()?;
        state
            .events
            .get(&event_id)
            .cloned()
            .ok_or(LedgerError::NotFound)
    }

    pub fn get_ticket(&self, token_id: TicketId) -> LedgerResult<Ticket> {
        let state = self.lock_state()?;
        state
            .tickets
            .get(&token_id)
            .cloned()
            .ok_or(LedgerError::NotFound)
    }

    /// Tickets owned by `owner`, in purchase order. Empty for unknown owners.
    pub fn user_tickets(&self, owner: PrincipalId) -> LedgerResult<Vec<TicketId>> {
        let state = self.lock_state()?;
        Ok(state
            .tickets_by_owner
            .get(&owner)
            .cloned()
            .unwrap_or_default())
    }

    /// Tickets minted against `event_id`, in purchase order. Empty for
    /// unknown events.
    pub fn event_tickets(&self, event_id: EventId) -> LedgerResult<Vec<TicketId>> {
        let state = self.lock_state()?;
        Ok(state
            .tickets_by_event
            .get(&event_id)
            .cloned()
            .unwrap_or_default())
    }

    pub fn total_events(&self) -> LedgerResult<u64> {
        let state = self.lock_state()?;
        Ok(state.events.len() as u64)
    }

    pub fn total_tickets(&self) -> LedgerResult<u64> {
        let state = self.lock_state()?;
        Ok(state.tickets.len() as u64)
    }

    /// A ticket is valid iff it exists, its event has not yet occurred,
    /// and it has not been used. Unknown tickets are simply invalid.
    pub fn is_ticket_valid(&self, token_id: TicketId) -> LedgerResult<bool> {
        let state = self.lock_state()?;
        let now = self.clock.now();

        let Some(ticket) = state.tickets.get(&token_id) else {
            return Ok(false);
        };
        let event = state
            .events
            .get(&ticket.event_id)
            .ok_or_else(|| LedgerError::internal("ticket references missing event"))?;

        Ok(!ticket.is_used && event.is_upcoming(now))
    }
}
