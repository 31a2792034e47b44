//! Service client - the typed façade the UI calls
//!
//! One method per resolver operation, identical shapes, errors propagated
//! unchanged. The transport is a deployment detail: this client calls the
//! resolver in-process, and the envelope transport
//! ([`crate::infrastructure::transport`]) dispatches remote-style requests
//! onto the same methods.

use crate::domain::entities::{Booking, Salon, Schedule, Service, Staff};
use crate::domain::ports::{DocumentStore, IdGenerator};
use crate::domain::value_objects::AuthResult;
use crate::error::PomadeResult;

use super::resolver::Resolver;

/// In-process service client wrapping a [`Resolver`]
pub struct ServiceClient<S: DocumentStore, G: IdGenerator> {
    resolver: Resolver<S, G>,
}

impl<S: DocumentStore, G: IdGenerator> ServiceClient<S, G> {
    pub fn new(resolver: Resolver<S, G>) -> Self {
        Self { resolver }
    }

    pub fn get_salons(&self) -> PomadeResult<Vec<Salon>> {
        self.resolver.get_salons()
    }

    pub fn get_services(&self, salon_id: &str) -> PomadeResult<Vec<Service>> {
        self.resolver.get_services(salon_id)
    }

    pub fn get_staff(&self, salon_id: &str) -> PomadeResult<Vec<Staff>> {
        self.resolver.get_staff(salon_id)
    }

    pub fn get_staff_schedules(&self, staff_id: &str) -> PomadeResult<Vec<Schedule>> {
        self.resolver.get_staff_schedules(staff_id)
    }

    pub fn get_bookings(&self, user_id: &str) -> PomadeResult<Vec<Booking>> {
        self.resolver.get_bookings(user_id)
    }

    pub fn create_booking(
        &self,
        user_id: &str,
        salon_id: &str,
        service_ids: &[String],
        staff_id: &str,
        time: &str,
    ) -> PomadeResult<Booking> {
        self.resolver
            .create_booking(user_id, salon_id, service_ids, staff_id, time)
    }

    pub fn register(
        &self,
        name: &str,
        phone: &str,
        email: &str,
        password: &str,
    ) -> PomadeResult<AuthResult> {
        self.resolver.register(name, phone, email, password)
    }

    pub fn login(&self, email: &str, password: &str) -> PomadeResult<AuthResult> {
        self.resolver.login(email, password)
    }
}
