//! Strongly-typed identifiers and their sequential allocator.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Identifier of a ticketable event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

/// Identifier of a minted ticket, unique across all events.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u64);

macro_rules! impl_u64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw identifier. Zero is never allocated; accepting it
            /// here keeps lookups of bogus ids a plain `NotFound`.
            pub fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = LedgerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = u64::from_str(s)
                    .map_err(|e| LedgerError::validation(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_u64_newtype!(EventId, "EventId");
impl_u64_newtype!(TicketId, "TicketId");

/// Monotonic identifier sequence starting at 1.
///
/// The ledger owns two independent sequences (events, tickets). Allocation
/// is never derived from collection size, so identifiers stay stable under
/// any future deletion path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Issue the next identifier, advancing the sequence.
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// How many identifiers were issued so far.
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one_and_is_strictly_increasing() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.issued(), 0);
        assert_eq!(seq.allocate(), 1);
        assert_eq!(seq.allocate(), 2);
        assert_eq!(seq.allocate(), 3);
        assert_eq!(seq.issued(), 3);
    }

    #[test]
    fn independent_sequences_do_not_interfere() {
        let mut events = IdSequence::new();
        let mut tickets = IdSequence::new();

        let _ = events.allocate();
        let _ = events.allocate();

        assert_eq!(tickets.allocate(), 1);
        assert_eq!(events.allocate(), 3);
    }

    #[test]
    fn ids_parse_and_display_round_trip() {
        let id: EventId = "42".parse().unwrap();
        assert_eq!(id, EventId::from_raw(42));
        assert_eq!(id.to_string(), "42");

        let err = "not-a-number".parse::<TicketId>().unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }
}
