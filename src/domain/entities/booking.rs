//! Booking entity

use serde::{Deserialize, Serialize};

use super::{Salon, Service, Staff};

/// A confirmed booking
///
/// Embeds snapshots of the salon, services, and staff as they were at
/// creation time, so later changes to seed data never retroactively alter
/// historical bookings. Only the user is referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub salon: Salon,
    pub services: Vec<Service>,
    pub staff: Staff,
    /// Display string copied from the chosen schedule slot
    pub time: String,
}

impl Booking {
    /// Sum of the embedded service prices
    pub fn total_price(&self) -> f64 {
        self.services.iter().map(|s| s.price).sum()
    }
}
