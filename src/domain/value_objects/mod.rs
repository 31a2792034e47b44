//! Domain value objects

mod auth;
mod step;

pub use auth::AuthResult;
pub use step::Step;
