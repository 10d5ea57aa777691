//! Payment escrow: the value-transfer seam and an in-memory treasury.
//!
//! The ledger forwards the buyer's payment to the organizer **inside** the
//! purchase's atomic unit: the transfer runs after every precondition has
//! passed and before any state is mutated, so a failed transfer rejects
//! the purchase with nothing to roll back.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use gatepass_auth::PrincipalId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds { balance: u64, required: u64 },

    /// The backing payment system could not complete the transfer.
    #[error("transfer backend failed: {0}")]
    Backend(String),
}

/// Moves value between principals.
///
/// Implementations must be all-or-nothing per call; the ledger treats any
/// error as "no funds moved".
pub trait ValueTransfer: Send + Sync {
    fn transfer(
        &self,
        from: PrincipalId,
        to: PrincipalId,
        amount: u64,
    ) -> Result<(), TransferError>;
}

/// In-memory balance table for tests and single-process embedding.
#[derive(Debug, Default)]
pub struct InMemoryTreasury {
    balances: Mutex<HashMap<PrincipalId, u64>>,
}

impl InMemoryTreasury {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a principal (test funding, external deposits).
    pub fn deposit(&self, principal: PrincipalId, amount: u64) {
        if let Ok(mut balances) = self.balances.lock() {
            *balances.entry(principal).or_insert(0) += amount;
        }
    }

    pub fn balance_of(&self, principal: PrincipalId) -> u64 {
        self.balances
            .lock()
            .map(|balances| balances.get(&principal).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl ValueTransfer for InMemoryTreasury {
    fn transfer(
        &self,
        from: PrincipalId,
        to: PrincipalId,
        amount: u64,
    ) -> Result<(), TransferError> {
        let mut balances = self
            .balances
            .lock()
            .map_err(|_| TransferError::Backend("balance table lock poisoned".to_string()))?;

        let balance = balances.get(&from).copied().unwrap_or(0);
        if balance < amount {
            return Err(TransferError::InsufficientFunds {
                balance,
                required: amount,
            });
        }

        balances.insert(from, balance - amount);
        *balances.entry(to).or_insert(0) += amount;
        Ok(())
    }
}
