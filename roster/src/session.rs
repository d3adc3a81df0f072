//! Session lifecycle.
//!
//! ARCHITECTURE
//! ============
//! A [`Session`] exists only between a successful login and the next logout.
//! It carries the user and the [`DashboardView`] chosen once from their role,
//! so pages match on a closed enum instead of re-checking the role.
//!
//! Login is the one asynchronous step in the app. [`SessionState::begin_login`]
//! hands out a [`LoginTicket`]; only the outcome for the newest ticket is
//! applied, so a second attempt supersedes one still in flight.

use crate::auth::Authenticator;
use crate::role::Role;
use crate::user::User;

/// Dashboard variant for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Hr,
    Manager,
    Employee,
}

impl From<Role> for DashboardView {
    fn from(role: Role) -> Self {
        match role {
            Role::Hr => Self::Hr,
            Role::Manager => Self::Manager,
            Role::Employee => Self::Employee,
        }
    }
}

/// An established, immutable session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user: User,
    view: DashboardView,
}

impl Session {
    #[must_use]
    pub fn new(user: User) -> Self {
        let view = DashboardView::from(user.role);
        Self { user, view }
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn view(&self) -> DashboardView {
        self.view
    }
}

/// Error shown inline on the login form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Please enter your email and password")]
    MissingCredentials,
}

/// Handle for one login attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginTicket(u64);

/// What happened when a login attempt completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Rejected,
    /// A newer attempt started first; this result was dropped.
    Superseded,
}

/// Session collaborator: the current session, if any, plus login progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    session: Option<Session>,
    pending: Option<LoginTicket>,
    next_ticket: u64,
    error: Option<LoginError>,
}

impl SessionState {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(Session::user)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Error from the most recent completed attempt.
    #[must_use]
    pub fn error(&self) -> Option<&LoginError> {
        self.error.as_ref()
    }

    /// Start an attempt, superseding any attempt still pending.
    pub fn begin_login(&mut self) -> LoginTicket {
        self.next_ticket += 1;
        let ticket = LoginTicket(self.next_ticket);
        self.pending = Some(ticket);
        self.error = None;
        ticket
    }

    /// Apply the verifier's answer for `ticket`.
    ///
    /// A rejected attempt leaves any existing session untouched.
    pub fn complete_login(&mut self, ticket: LoginTicket, user: Option<User>) -> LoginOutcome {
        if self.pending != Some(ticket) {
            log::debug!("dropping superseded login attempt");
            return LoginOutcome::Superseded;
        }
        self.pending = None;
        match user {
            Some(user) => {
                log::info!("login succeeded: user_id={} role={}", user.id, user.role);
                self.session = Some(Session::new(user));
                self.error = None;
                LoginOutcome::Authenticated
            }
            None => {
                log::warn!("login rejected");
                self.error = Some(LoginError::InvalidCredentials);
                LoginOutcome::Rejected
            }
        }
    }

    /// Record a form that was submitted without both fields.
    pub fn reject_input(&mut self) {
        self.pending = None;
        self.error = Some(LoginError::MissingCredentials);
    }

    /// Verify `identifier`/`secret` and establish a session in one step.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::MissingCredentials`] for blank input and
    /// [`LoginError::InvalidCredentials`] when the pair is not recognized.
    pub fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        identifier: &str,
        secret: &str,
    ) -> Result<&Session, LoginError> {
        if identifier.trim().is_empty() || secret.is_empty() {
            self.reject_input();
            return Err(LoginError::MissingCredentials);
        }
        let ticket = self.begin_login();
        let user = authenticator.verify(identifier, secret);
        match self.complete_login(ticket, user) {
            LoginOutcome::Authenticated => self.session.as_ref().ok_or(LoginError::InvalidCredentials),
            LoginOutcome::Rejected | LoginOutcome::Superseded => Err(LoginError::InvalidCredentials),
        }
    }

    /// End the session. Any pending attempt is abandoned.
    pub fn logout(&mut self) {
        if let Some(user) = self.user() {
            log::info!("logout: user_id={}", user.id);
        }
        self.session = None;
        self.pending = None;
        self.error = None;
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
