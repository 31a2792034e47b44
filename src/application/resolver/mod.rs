//! Resolver layer
//!
//! Stateless query and mutation implementations over a [`DocumentStore`].
//! Queries are read-filter-return; mutations are read-validate-mutate-write.
//! Every call re-reads the document, so edits by other processes are picked
//! up immediately.

mod auth;
mod booking;
mod queries;

use std::time::Duration;

use crate::domain::ports::{DocumentStore, IdGenerator};

/// Query/mutation resolvers bound to a store and an id source
///
/// `latency` is a fixed artificial delay applied to every operation so
/// loading states are observable in the demo UI. It defaults to zero and
/// stays zero in tests.
pub struct Resolver<S: DocumentStore, G: IdGenerator> {
    store: S,
    ids: G,
    latency: Duration,
}

impl<S: DocumentStore, G: IdGenerator> Resolver<S, G> {
    pub fn new(store: S, ids: G) -> Self {
        Self {
            store,
            ids,
            latency: Duration::ZERO,
        }
    }

    /// Apply a fixed artificial delay to every operation
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }
}
