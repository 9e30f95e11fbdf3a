//! Session data structures.

use crate::constants::USER_ID_PREFIX;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The persisted player profile.
///
/// Serialized field names match the stored record:
/// `{"id", "name", "email", "highScore"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub high_score: u32,
}

impl UserProfile {
    /// New profile with a fresh random id and zero high score.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: generate_user_id(),
            name: name.into(),
            email: email.into(),
            high_score: 0,
        }
    }
}

/// Opaque unique identifier for a new profile.
pub fn generate_user_id() -> String {
    format!("{}{}", USER_ID_PREFIX, Uuid::new_v4().simple())
}

/// Display name for a login: the email's local part.
pub fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().trim().to_string()
}

/// Session lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing loaded yet.
    #[default]
    Uninitialized,
    /// Restoring from storage or waiting on a sign-in round trip.
    Loading,
    Authenticated(UserProfile),
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Uninitialized | SessionState::Loading)
    }
}
