//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// One variant per rejection kind the public operations can surface, so
/// callers can distinguish them without string matching. Every mutating
/// operation is all-or-nothing: any of these means no state changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A requested event or ticket does not exist.
    #[error("not found")]
    NotFound,

    /// A value failed validation (past date, zero capacity, empty field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The event has no remaining ticket capacity.
    #[error("sold out")]
    CapacityExceeded,

    /// The offered payment does not cover the ticket price.
    #[error("insufficient payment: required {required}, offered {offered}")]
    InsufficientPayment { required: u64, offered: u64 },

    /// The event is inactive or its date has already passed.
    #[error("event inactive or already occurred")]
    EventInactiveOrElapsed,

    /// The caller is not the organizer of the ticket's event.
    #[error("unauthorized")]
    Unauthorized,

    /// The ticket was already marked used.
    #[error("ticket already used")]
    AlreadyUsed,

    /// The value-transfer collaborator rejected the payment; the purchase
    /// rolled back.
    #[error("payment transfer failed: {0}")]
    TransferFailed(String),

    /// Infrastructure fault (e.g. poisoned state lock).
    #[error("internal error: {0}")]
    Internal(String),
}

impl LedgerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn transfer_failed(msg: impl Into<String>) -> Self {
        Self::TransferFailed(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
