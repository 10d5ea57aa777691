//! `gatepass-events` — fire-and-forget notification plumbing.
//!
//! Notifications are observability signals emitted alongside committed
//! mutations. They are never consulted to rebuild state and must never
//! fail the primary operation.

pub mod bus;
pub mod in_memory_bus;
pub mod notification;

pub use bus::{NotificationBus, Subscription};
pub use in_memory_bus::{InMemoryBusError, InMemoryNotificationBus};
pub use notification::Notification;
