//! Simulated sign-in round trip.
//!
//! Login and registration resolve after a fixed delay so the UI behaves as
//! if a backend were involved. The delay holds no state of its own.

use super::store::SessionStore;
use super::types::UserProfile;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
    },
}

#[derive(Debug, Clone)]
pub struct PendingAuth {
    request: AuthRequest,
    remaining: Duration,
}

impl PendingAuth {
    /// Put the session into its loading state and start the countdown.
    pub fn start(request: AuthRequest, latency: Duration, store: &mut SessionStore) -> Self {
        store.begin_request();
        Self {
            request,
            remaining: latency,
        }
    }

    /// Advance by `elapsed`. Returns the signed-in profile once the delay
    /// has run out; the caller drops the pending request afterwards.
    pub fn poll(&mut self, elapsed: Duration, store: &mut SessionStore) -> Option<UserProfile> {
        self.remaining = self.remaining.saturating_sub(elapsed);
        if !self.remaining.is_zero() {
            return None;
        }

        let profile = match &self.request {
            AuthRequest::Login { email, password } => store.login(email, password),
            AuthRequest::Register {
                name,
                email,
                password,
            } => store.register(name, email, password),
        };
        Some(profile)
    }
}
