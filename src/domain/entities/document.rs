//! The persisted document - all collections in one JSON file

use serde::{Deserialize, Serialize};

use super::{Booking, Salon, Schedule, Service, Staff, User};

/// Top-level shape of the data store
///
/// Six flat collections related by foreign-key-style id fields. The whole
/// document is read and written as a unit; there are no partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub salons: Vec<Salon>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl Document {
    pub fn salon(&self, id: &str) -> Option<&Salon> {
        self.salons.iter().find(|s| s.id == id)
    }

    pub fn staff_member(&self, id: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Case-sensitive exact email match
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Services belonging to a salon, in original relative order
    pub fn services_for_salon(&self, salon_id: &str) -> Vec<Service> {
        self.services
            .iter()
            .filter(|s| s.salon_id == salon_id)
            .cloned()
            .collect()
    }

    /// Staff employed by a salon, in original relative order
    pub fn staff_for_salon(&self, salon_id: &str) -> Vec<Staff> {
        self.staff
            .iter()
            .filter(|s| s.salon_id == salon_id)
            .cloned()
            .collect()
    }

    /// Schedule slots belonging to a staff member, in original relative order
    pub fn schedules_for_staff(&self, staff_id: &str) -> Vec<Schedule> {
        self.schedules
            .iter()
            .filter(|s| s.staff_id == staff_id)
            .cloned()
            .collect()
    }

    /// Bookings created by a user, in original relative order
    pub fn bookings_for_user(&self, user_id: &str) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn has_booking_id(&self, id: &str) -> bool {
        self.bookings.iter().any(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_services() -> Document {
        Document {
            services: vec![
                Service {
                    id: "svc-1".to_string(),
                    name: "Haircut".to_string(),
                    price: 25.0,
                    salon_id: "salon-1".to_string(),
                },
                Service {
                    id: "svc-2".to_string(),
                    name: "Coloring".to_string(),
                    price: 80.0,
                    salon_id: "salon-2".to_string(),
                },
                Service {
                    id: "svc-3".to_string(),
                    name: "Beard Trim".to_string(),
                    price: 15.0,
                    salon_id: "salon-1".to_string(),
                },
            ],
            ..Document::default()
        }
    }

    #[test]
    fn services_for_salon_filters_and_preserves_order() {
        let doc = doc_with_services();
        let services = doc.services_for_salon("salon-1");
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].id, "svc-1");
        assert_eq!(services[1].id, "svc-3");
    }

    #[test]
    fn services_for_salon_empty_when_no_match() {
        let doc = doc_with_services();
        assert!(doc.services_for_salon("salon-99").is_empty());
    }

    #[test]
    fn empty_json_object_deserializes_to_empty_document() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, Document::default());
    }
}
