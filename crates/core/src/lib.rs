//! `gatepass-core` — ledger foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod clock;
pub mod error;
pub mod id;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{LedgerError, LedgerResult};
pub use id::{EventId, IdSequence, TicketId};
