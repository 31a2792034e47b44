//! Terminal rendering helpers for bookings and confirmation summaries

use crate::domain::entities::Booking;
use crate::domain::services::flow::FlowState;

/// One-line-per-field summary of a booking
pub fn render_booking(booking: &Booking) -> String {
    let services = booking
        .services
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "#{id}  {salon} - {services} with {staff} at {time}  (${total:.2})",
        id = booking.id,
        salon = booking.salon.name,
        services = services,
        staff = booking.staff.name,
        time = booking.time,
        total = booking.total_price(),
    )
}

/// Confirmation screen body built from the current selections
pub fn render_confirmation(state: &FlowState) -> String {
    let mut out = String::new();
    if let Some(salon) = &state.selected_salon {
        out.push_str(&format!("Salon:    {} ({})\n", salon.name, salon.address));
    }
    for service in &state.selected_services {
        out.push_str(&format!("Service:  {} (${:.2})\n", service.name, service.price));
    }
    if let Some(staff) = &state.selected_staff {
        out.push_str(&format!("Stylist:  {} - {}\n", staff.name, staff.specialization));
    }
    if let Some(slot) = &state.selected_schedule {
        out.push_str(&format!("Time:     {}\n", slot.time));
    }
    out.push_str(&format!("Total:    ${:.2}\n", state.total_price()));
    out
}
