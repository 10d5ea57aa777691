//! Notification fan-out contract.
//!
//! The ledger publishes one notification per committed mutation and moves
//! on. Delivery is best-effort: an implementation must never block the
//! publisher on a slow observer or let a delivery failure reach the
//! operation that produced the notification. Observers that need a
//! complete history should rebuild it from the ledger, not from the bus.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

/// Receiving end of one observer's notification stream.
///
/// Backed by a bounded buffer owned by the bus; notifications published
/// while the buffer is full are dropped for this observer only. One
/// subscription per consumer thread.
#[derive(Debug)]
pub struct Subscription<N> {
    receiver: Receiver<N>,
}

impl<N> Subscription<N> {
    pub fn new(receiver: Receiver<N>) -> Self {
        Self { receiver }
    }

    /// The next buffered notification, if any. Never blocks.
    pub fn next_ready(&self) -> Option<N> {
        self.receiver.try_recv().ok()
    }

    /// Wait up to `timeout` for the next notification.
    ///
    /// `None` means the wait elapsed or the bus is gone; fire-and-forget
    /// observers treat both the same way.
    pub fn wait_next(&self, timeout: Duration) -> Option<N> {
        match self.receiver.recv_timeout(timeout) {
            Ok(notification) => Some(notification),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Drain everything currently buffered, in delivery order.
    pub fn drain_ready(&self) -> Vec<N> {
        let mut drained = Vec::new();
        while let Some(notification) = self.next_ready() {
            drained.push(notification);
        }
        drained
    }
}

/// Broadcast contract for ledger notifications.
///
/// `publish` errors signal infrastructure faults only (the publishing side
/// logs and continues); a notification that merely found no healthy
/// subscriber is not an error.
pub trait NotificationBus<N>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    /// Best-effort broadcast to every current subscriber.
    fn publish(&self, notification: N) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<N>;
}

impl<N, B> NotificationBus<N> for Arc<B>
where
    B: NotificationBus<N> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, notification: N) -> Result<(), Self::Error> {
        (**self).publish(notification)
    }

    fn subscribe(&self) -> Subscription<N> {
        (**self).subscribe()
    }
}
