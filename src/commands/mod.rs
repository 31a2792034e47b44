//! CLI command handlers

mod book;
mod bookings;
mod call;
mod init;

pub use book::cmd_book;
pub use bookings::cmd_bookings;
pub use call::cmd_call;
pub use init::cmd_init;
