//! Id generation
//!
//! Booking and user ids are the creation timestamp in milliseconds, as a
//! string. The generator bumps past its own last value so two creations in
//! the same millisecond still get distinct ids; collisions with ids already
//! in the store are handled by the caller.

use std::cell::Cell;

use chrono::Utc;

use crate::domain::ports::IdGenerator;

/// Millisecond-timestamp id source, monotonic within one instance
pub struct TimestampIdGenerator {
    last: Cell<i64>,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self { last: Cell::new(0) }
    }
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last.get() + 1);
        self.last.set(id);
        id.to_string()
    }
}
