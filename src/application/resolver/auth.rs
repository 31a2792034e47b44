//! Auth mutation resolvers - register and login
//!
//! All validation and auth outcomes are soft failures: an `AuthResult` with
//! `success: false` and a user-facing message. Hard errors are reserved for
//! a broken store.
//!
//! The register checks run in a fixed order (existing email, blank fields,
//! phone length, email format, password length) because callers assert
//! specific messages for specific malformed inputs. Do not reorder.

use crate::domain::entities::User;
use crate::domain::ports::{DocumentStore, IdGenerator};
use crate::domain::value_objects::AuthResult;
use crate::error::PomadeResult;

use super::Resolver;

const MSG_EMAIL_TAKEN: &str = "Email already registered. Please login instead.";
const MSG_FIELDS_REQUIRED: &str = "All fields are required";
const MSG_PHONE_TOO_SHORT: &str = "Phone number must be at least 10 digits";
const MSG_EMAIL_INVALID: &str = "Please enter a valid email address";
const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
const MSG_REGISTERED: &str = "Registration successful";
const MSG_BAD_CREDENTIALS: &str = "Invalid email or password";
const MSG_LOGGED_IN: &str = "Login successful";

impl<S: DocumentStore, G: IdGenerator> Resolver<S, G> {
    /// Create a user account
    ///
    /// On success the new user is appended and persisted, and the returned
    /// profile omits the password.
    pub fn register(
        &self,
        name: &str,
        phone: &str,
        email: &str,
        password: &str,
    ) -> PomadeResult<AuthResult> {
        self.simulate_latency();
        let mut document = self.store.read()?;

        if document.user_by_email(email).is_some() {
            return Ok(AuthResult::failure(MSG_EMAIL_TAKEN));
        }
        if name.is_empty() || phone.is_empty() || email.is_empty() || password.is_empty() {
            return Ok(AuthResult::failure(MSG_FIELDS_REQUIRED));
        }
        if phone.chars().count() < 10 {
            return Ok(AuthResult::failure(MSG_PHONE_TOO_SHORT));
        }
        if !email.contains('@') {
            return Ok(AuthResult::failure(MSG_EMAIL_INVALID));
        }
        if password.chars().count() < 6 {
            return Ok(AuthResult::failure(MSG_PASSWORD_TOO_SHORT));
        }

        let mut id = self.ids.next_id();
        while document.users.iter().any(|u| u.id == id) {
            id = self.ids.next_id();
        }

        let user = User {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let profile = user.profile();
        document.users.push(user);
        self.store.write(&document)?;

        Ok(AuthResult::ok(MSG_REGISTERED, profile))
    }

    /// Authenticate by exact email + password match
    ///
    /// The failure message is intentionally generic so it never reveals
    /// which field was wrong.
    pub fn login(&self, email: &str, password: &str) -> PomadeResult<AuthResult> {
        self.simulate_latency();
        let document = self.store.read()?;

        let matched = document
            .users
            .iter()
            .find(|u| u.email == email && u.password == password);

        Ok(match matched {
            Some(user) => AuthResult::ok(MSG_LOGGED_IN, user.profile()),
            None => AuthResult::failure(MSG_BAD_CREDENTIALS),
        })
    }
}
