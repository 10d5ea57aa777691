//! In-memory notification bus.
//!
//! Each subscriber owns a bounded buffer. Publishing never blocks: a full
//! buffer drops that delivery for that subscriber (the ledger is the
//! source of truth, the bus is advisory), and a disconnected subscriber
//! is forgotten on the next publish.

use std::sync::Mutex;
use std::sync::mpsc::{self, SyncSender, TrySendError};

use crate::bus::{NotificationBus, Subscription};
use crate::notification::Notification;

/// Per-subscriber buffer when none is specified. Generous for entrance
/// scanners and test observers; size explicitly for anything busier.
const DEFAULT_BUFFER: usize = 64;

#[derive(Debug)]
pub enum InMemoryBusError {
    /// The subscriber table lock was poisoned by a panicking thread.
    Poisoned,
}

/// Single-process broadcast bus for [`Notification`] values.
#[derive(Debug)]
pub struct InMemoryNotificationBus<N: Notification> {
    buffer: usize,
    subscribers: Mutex<Vec<SyncSender<N>>>,
}

impl<N: Notification> InMemoryNotificationBus<N> {
    pub fn new() -> Self {
        Self::with_buffer(DEFAULT_BUFFER)
    }

    /// A bus whose subscribers each hold at most `buffer` undelivered
    /// notifications; anything beyond that is dropped for the laggard.
    pub fn with_buffer(buffer: usize) -> Self {
        Self {
            // A zero-capacity channel would make try_send a rendezvous
            // and every publish a drop.
            buffer: buffer.max(1),
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<N: Notification> Default for InMemoryNotificationBus<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notification> NotificationBus<N> for InMemoryNotificationBus<N> {
    type Error = InMemoryBusError;

    fn publish(&self, notification: N) -> Result<(), Self::Error> {
        let mut subscribers = self
            .subscribers
            .lock()
            .map_err(|_| InMemoryBusError::Poisoned)?;

        subscribers.retain(|tx| match tx.try_send(notification.clone()) {
            Ok(()) => true,
            // Laggard: this delivery is lost, the subscriber stays.
            Err(TrySendError::Full(_)) => true,
            Err(TrySendError::Disconnected(_)) => false,
        });

        Ok(())
    }

    fn subscribe(&self) -> Subscription<N> {
        let (tx, rx) = mpsc::sync_channel(self.buffer);

        // On a poisoned table the subscription is still handed out; it
        // simply never receives anything.
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }

        Subscription::new(rx)
    }
}
