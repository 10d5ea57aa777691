use chrono::{DateTime, Utc};

/// A notification emitted after a committed mutation.
///
/// Notifications are:
/// - **immutable** (treat them as facts)
/// - **append-only** from the ledger's point of view
/// - **advisory**: observers may miss or duplicate them; the ledger state
///   is the source of truth
pub trait Notification: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable name/type identifier (e.g. "ticket.purchased").
    fn kind(&self) -> &'static str;

    /// When the underlying mutation committed (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
