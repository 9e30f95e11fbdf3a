//! The session store: owns the signed-in profile and keeps storage in sync.

use super::storage::{MemoryStorage, ProfileStorage};
use super::types::{name_from_email, SessionState, UserProfile};
use crate::error::StorageError;

/// Receives the final score of a run.
///
/// The game loop only needs this one operation from the session.
pub trait ScoreSink {
    /// Store `score` if it beats the current high score. Returns true when
    /// the high score changed.
    fn record_score_if_higher(&mut self, score: u32) -> bool;
}

pub struct SessionStore {
    storage: Box<dyn ProfileStorage>,
    state: SessionState,
    in_memory_only: bool,
}

impl SessionStore {
    pub fn new(storage: impl ProfileStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            state: SessionState::Uninitialized,
            in_memory_only: false,
        }
    }

    /// Store that never touches disk.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.state.user()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// True once a storage failure forced the session into memory.
    pub fn is_in_memory_only(&self) -> bool {
        self.in_memory_only
    }

    pub fn high_score(&self) -> u32 {
        self.user().map(|u| u.high_score).unwrap_or(0)
    }

    /// Load the persisted profile at startup. Loading is finished when this
    /// returns, whatever the outcome.
    pub fn restore(&mut self) -> &SessionState {
        self.state = SessionState::Loading;

        self.state = match self.storage.load() {
            Ok(Some(profile)) => {
                tracing::info!(user_id = %profile.id, "Restored saved profile");
                SessionState::Authenticated(profile)
            }
            Ok(None) => SessionState::Anonymous,
            Err(err) if err.is_malformed() => {
                tracing::warn!(error = %err, "Discarding malformed profile record");
                if let Err(err) = self.storage.remove() {
                    self.degrade(err);
                }
                SessionState::Anonymous
            }
            Err(err) => {
                self.degrade(err);
                SessionState::Anonymous
            }
        };

        &self.state
    }

    /// Mark a sign-in round trip as in flight.
    pub fn begin_request(&mut self) {
        self.state = SessionState::Loading;
    }

    /// Mock login: always succeeds and creates a fresh profile named after
    /// the email's local part. The password is not checked.
    pub fn login(&mut self, email: &str, _password: &str) -> UserProfile {
        let profile = UserProfile::new(name_from_email(email), email.trim());
        self.sign_in(profile)
    }

    /// Mock registration: same as `login` with an explicit display name.
    pub fn register(&mut self, name: &str, email: &str, _password: &str) -> UserProfile {
        let profile = UserProfile::new(name.trim(), email.trim());
        self.sign_in(profile)
    }

    /// Drop the session and delete the stored record.
    pub fn logout(&mut self) {
        if let Some(user) = self.user() {
            tracing::info!(user_id = %user.id, "Logged out");
        }
        self.state = SessionState::Anonymous;
        if let Err(err) = self.storage.remove() {
            self.degrade(err);
        }
    }

    fn sign_in(&mut self, profile: UserProfile) -> UserProfile {
        tracing::info!(user_id = %profile.id, name = %profile.name, "Signed in");
        self.state = SessionState::Authenticated(profile.clone());
        self.persist();
        profile
    }

    fn persist(&mut self) {
        let result = match self.state.user() {
            Some(user) => self.storage.save(user),
            None => return,
        };
        if let Err(err) = result {
            self.degrade(err);
        }
    }

    /// Switch to memory-only storage after a write or read failure.
    fn degrade(&mut self, err: StorageError) {
        tracing::warn!(error = %err, "Profile storage failed, continuing in memory only");
        let mut fallback = MemoryStorage::new();
        if let Some(user) = self.state.user() {
            // Memory saves only fail on serialization, which a profile cannot hit.
            let _ = fallback.save(user);
        }
        self.storage = Box::new(fallback);
        self.in_memory_only = true;
    }
}

impl ScoreSink for SessionStore {
    fn record_score_if_higher(&mut self, score: u32) -> bool {
        let SessionState::Authenticated(user) = &mut self.state else {
            return false;
        };
        if score <= user.high_score {
            return false;
        }
        tracing::info!(user_id = %user.id, old = user.high_score, new = score, "New high score");
        user.high_score = score;
        self.persist();
        true
    }
}
