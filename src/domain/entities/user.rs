//! User entity and its password-free profile view

use serde::{Deserialize, Serialize};

/// A registered user
///
/// The password is stored and compared as a plain string. This is an explicit
/// shortcut of the mock service and must never be carried into anything
/// production-facing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// At least 10 characters
    pub phone: String,
    /// Contains "@", unique across users
    pub email: String,
    pub password: String,
}

/// The user as exposed to callers - identical to [`User`] minus the password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl User {
    /// The password-free view returned by login/register
    pub fn profile(&self) -> Profile {
        Profile {
            id: self.id.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}
