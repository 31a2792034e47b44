//! Soft-failure result for register/login

use serde::{Deserialize, Serialize};

use crate::domain::entities::Profile;

/// Outcome of a register or login operation
///
/// Validation, auth, and conflict failures are communicated through this
/// value (`success: false` plus a user-facing message), never as errors.
/// On success `user` carries the password-free profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Profile>,
}

impl AuthResult {
    pub fn ok(message: impl Into<String>, user: Profile) -> Self {
        AuthResult {
            success: true,
            message: message.into(),
            user: Some(user),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        AuthResult {
            success: false,
            message: message.into(),
            user: None,
        }
    }
}
