//! `gatepass-ledger` — the ticketing state machine.
//!
//! Mints, tracks, and validates ticket records against event records,
//! enforcing payment, capacity, timing, and ownership invariants on every
//! mutation. All state lives behind one lock; every mutating operation
//! commits fully or rejects with no partial effect.

pub mod escrow;
pub mod event;
pub mod facade;
pub mod notification;
pub mod ticket;

pub use escrow::{InMemoryTreasury, TransferError, ValueTransfer};
pub use event::{EventRecord, NewEvent};
pub use facade::TicketLedger;
pub use notification::LedgerNotification;
pub use ticket::Ticket;
