//! Domain entities
//!
//! Plain data shapes persisted in the document store. JSON field names are
//! camelCase on the wire (`salonId`, `isAvailable`, ...) matching the
//! published operation contract.

mod booking;
mod document;
mod salon;
mod schedule;
mod service;
mod staff;
mod user;

pub use booking::Booking;
pub use document::Document;
pub use salon::Salon;
pub use schedule::Schedule;
pub use service::Service;
pub use staff::Staff;
pub use user::{Profile, User};
