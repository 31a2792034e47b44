//! Query resolvers - pure reads, no validation
//!
//! Filter arguments are just keys: an unknown id yields an empty list, not
//! an error.

use crate::domain::entities::{Booking, Salon, Schedule, Service, Staff};
use crate::domain::ports::{DocumentStore, IdGenerator};
use crate::error::PomadeResult;

use super::Resolver;

impl<S: DocumentStore, G: IdGenerator> Resolver<S, G> {
    /// All salons, unfiltered
    pub fn get_salons(&self) -> PomadeResult<Vec<Salon>> {
        self.simulate_latency();
        Ok(self.store.read()?.salons)
    }

    /// Services offered by one salon, in original relative order
    pub fn get_services(&self, salon_id: &str) -> PomadeResult<Vec<Service>> {
        self.simulate_latency();
        Ok(self.store.read()?.services_for_salon(salon_id))
    }

    /// Staff employed by one salon
    pub fn get_staff(&self, salon_id: &str) -> PomadeResult<Vec<Staff>> {
        self.simulate_latency();
        Ok(self.store.read()?.staff_for_salon(salon_id))
    }

    /// Schedule slots for one staff member
    pub fn get_staff_schedules(&self, staff_id: &str) -> PomadeResult<Vec<Schedule>> {
        self.simulate_latency();
        Ok(self.store.read()?.schedules_for_staff(staff_id))
    }

    /// Bookings created by one user
    pub fn get_bookings(&self, user_id: &str) -> PomadeResult<Vec<Booking>> {
        self.simulate_latency();
        Ok(self.store.read()?.bookings_for_user(user_id))
    }
}
