//! Session context and the credential verifier handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `roster::session::SessionState` in a signal so route guards and
//! user-aware components re-render when the session starts or ends.

use std::sync::Arc;

use leptos::prelude::*;
use roster::auth::Authenticator;
use roster::session::{LoginOutcome, LoginTicket, Session, SessionState};
use roster::user::User;

/// Reactive session collaborator.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Current session; tracked.
    pub fn session(&self) -> Option<Session> {
        self.state.with(|state| state.session().cloned())
    }

    /// Signed-in user; tracked.
    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn is_pending(&self) -> bool {
        self.state.with(SessionState::is_pending)
    }

    /// Inline message from the last attempt, if it failed.
    pub fn error_message(&self) -> Option<String> {
        self.state
            .with(|state| state.error().map(ToString::to_string))
    }

    /// Start an attempt. `None` once the owning scope has been disposed.
    pub fn begin_login(&self) -> Option<LoginTicket> {
        self.state.try_update(SessionState::begin_login)
    }

    pub fn complete_login(&self, ticket: LoginTicket, user: Option<User>) -> LoginOutcome {
        self.state
            .try_update(|state| state.complete_login(ticket, user))
            .unwrap_or(LoginOutcome::Superseded)
    }

    pub fn reject_input(&self) {
        self.state.update(SessionState::reject_input);
    }

    pub fn logout(&self) {
        self.state.update(SessionState::logout);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to the credential verifier.
#[derive(Clone)]
pub struct AuthProvider(Arc<dyn Authenticator>);

impl AuthProvider {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self(authenticator)
    }

    pub fn verify(&self, identifier: &str, secret: &str) -> Option<User> {
        self.0.verify(identifier, secret)
    }
}
