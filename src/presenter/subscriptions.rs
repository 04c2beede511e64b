//! Registry of the operations a presenter started and still waits for.

use std::collections::HashMap;

use tokio::task::AbortHandle;

/// Identifies one operation of a [`Subscriptions`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Outstanding operations.
///
/// An entry leaves the set either when its result is consumed
/// ([`Subscriptions::remove`]) or when the whole set is cancelled
/// ([`Subscriptions::clear`]). Dropping the set cancels what is left.
#[derive(Debug, Default)]
pub struct Subscriptions {
    next: u64,
    live: HashMap<Ticket, AbortHandle>,
}

impl Subscriptions {
    /// Create an empty [`Subscriptions`] set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the ticket of the next operation.
    pub fn reserve(&mut self) -> Ticket {
        let ticket = Ticket(self.next);
        self.next = self.next.wrapping_add(1);
        ticket
    }

    /// Register a spawned operation.
    pub fn add(&mut self, ticket: Ticket, handle: AbortHandle) {
        self.live.insert(ticket, handle);
    }

    /// Forget a finished operation. Returns `false` if the ticket is not live
    /// anymore, meaning its result must be ignored.
    pub fn remove(&mut self, ticket: Ticket) -> bool {
        self.live.remove(&ticket).is_some()
    }

    pub fn contains(&self, ticket: Ticket) -> bool {
        self.live.contains_key(&ticket)
    }

    /// Cancel every outstanding operation. Returns how many were cancelled.
    pub fn clear(&mut self) -> usize {
        let count = self.live.len();
        for (_, handle) in self.live.drain() {
            handle.abort();
        }
        count
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.clear();
    }
}
