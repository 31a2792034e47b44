//! Booking creation resolver

use crate::domain::entities::Booking;
use crate::domain::ports::{DocumentStore, IdGenerator};
use crate::error::{PomadeError, PomadeResult};

use super::Resolver;

impl<S: DocumentStore, G: IdGenerator> Resolver<S, G> {
    /// Create a booking from resolved ids
    ///
    /// Resolution failures (unknown salon or staff, no matching services,
    /// unknown user) are hard errors and nothing is persisted. On success
    /// the booking embeds snapshots of the resolved salon, services, and
    /// staff, so later seed-data edits never alter it.
    pub fn create_booking(
        &self,
        user_id: &str,
        salon_id: &str,
        service_ids: &[String],
        staff_id: &str,
        time: &str,
    ) -> PomadeResult<Booking> {
        self.simulate_latency();
        let mut document = self.store.read()?;

        let salon = document
            .salon(salon_id)
            .cloned()
            .ok_or_else(|| PomadeError::not_found("salon", salon_id))?;
        let staff = document
            .staff_member(staff_id)
            .cloned()
            .ok_or_else(|| PomadeError::not_found("staff", staff_id))?;

        let services: Vec<_> = document
            .services
            .iter()
            .filter(|s| service_ids.iter().any(|id| *id == s.id))
            .cloned()
            .collect();
        if services.is_empty() {
            return Err(PomadeError::not_found("services", service_ids.join(",")));
        }

        if document.user(user_id).is_none() {
            return Err(PomadeError::not_found("user", user_id));
        }

        let mut id = self.ids.next_id();
        while document.has_booking_id(&id) {
            id = self.ids.next_id();
        }

        let booking = Booking {
            id,
            user_id: user_id.to_string(),
            salon,
            services,
            staff,
            time: time.to_string(),
        };
        document.bookings.push(booking.clone());
        self.store.write(&document)?;

        Ok(booking)
    }
}
