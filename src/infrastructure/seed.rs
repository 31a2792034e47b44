//! Seed data
//!
//! The demo ships with three salons, their services and staff, a schedule
//! per staff member, and one demo account (`demo@salon.com` / `demo123`).
//! Salons, services, staff, and schedules are read-only for the lifetime of
//! the process; only users and bookings grow.

use crate::domain::entities::{Document, Salon, Schedule, Service, Staff, User};

fn salon(id: &str, name: &str, address: &str, rating: f64, specialties: &[&str]) -> Salon {
    Salon {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        rating,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
    }
}

fn service(id: &str, name: &str, price: f64, salon_id: &str) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        price,
        salon_id: salon_id.to_string(),
    }
}

fn staff(id: &str, name: &str, specialization: &str, salon_id: &str) -> Staff {
    Staff {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        photo: format!("https://i.pravatar.cc/150?u={}", id),
        salon_id: salon_id.to_string(),
    }
}

fn slot(id: &str, time: &str, is_available: bool, staff_id: &str) -> Schedule {
    Schedule {
        id: id.to_string(),
        time: time.to_string(),
        is_available,
        staff_id: staff_id.to_string(),
    }
}

/// Build the initial document
pub fn seed_document() -> Document {
    let salons = vec![
        salon(
            "salon-1",
            "Shear Genius",
            "12 Rosemary Lane",
            4.8,
            &["Haircuts", "Coloring"],
        ),
        salon(
            "salon-2",
            "The Fade Factory",
            "48 Alder Street",
            4.5,
            &["Barbering", "Beard Care"],
        ),
        salon(
            "salon-3",
            "Velvet & Vine",
            "7 Harbor Walk",
            4.9,
            &["Styling", "Bridal", "Nails"],
        ),
    ];

    let services = vec![
        service("svc-101", "Women's Haircut", 45.0, "salon-1"),
        service("svc-102", "Men's Haircut", 30.0, "salon-1"),
        service("svc-103", "Full Color", 95.0, "salon-1"),
        service("svc-104", "Blowout", 35.0, "salon-1"),
        service("svc-201", "Classic Fade", 25.0, "salon-2"),
        service("svc-202", "Beard Trim", 15.0, "salon-2"),
        service("svc-203", "Hot Towel Shave", 28.0, "salon-2"),
        service("svc-301", "Updo Styling", 65.0, "salon-3"),
        service("svc-302", "Bridal Package", 180.0, "salon-3"),
        service("svc-303", "Manicure", 30.0, "salon-3"),
    ];

    let staff = vec![
        staff("staff-11", "Alex Rivera", "Colorist", "salon-1"),
        staff("staff-12", "Priya Nair", "Senior Stylist", "salon-1"),
        staff("staff-21", "Marcus Cole", "Master Barber", "salon-2"),
        staff("staff-22", "Theo Brandt", "Barber", "salon-2"),
        staff("staff-31", "Ines Duarte", "Bridal Specialist", "salon-3"),
        staff("staff-32", "Mei Tanaka", "Nail Artist", "salon-3"),
    ];

    let mut schedules = Vec::new();
    let times = ["9:00 AM", "10:30 AM", "12:00 PM", "2:00 PM", "3:30 PM", "5:00 PM"];
    for member in &staff {
        for (i, time) in times.iter().enumerate() {
            // Roughly a third of the slots are already taken.
            let is_available = (i + member.id.len()) % 3 != 0;
            schedules.push(slot(
                &format!("slot-{}-{}", member.id, i + 1),
                time,
                is_available,
                &member.id,
            ));
        }
    }

    let users = vec![User {
        id: "u-demo".to_string(),
        name: "Demo User".to_string(),
        phone: "5551234567".to_string(),
        email: "demo@salon.com".to_string(),
        password: "demo123".to_string(),
    }];

    Document {
        salons,
        services,
        staff,
        schedules,
        users,
        bookings: Vec::new(),
    }
}
