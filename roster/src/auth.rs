//! Credential verification.
//!
//! DESIGN
//! ======
//! Verification sits behind the [`Authenticator`] trait so the session never
//! knows how secrets are stored. [`AccountDirectory`] is the in-memory
//! implementation: it keeps a SHA-256 hex digest per account, keyed by the
//! normalized identifier, and is loaded from a JSON document rather than
//! compiled-in literals.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::user::User;

const DEMO_ACCOUNTS_JSON: &str = include_str!("../data/accounts.json");

/// Capability that turns an identifier/secret pair into a user.
pub trait Authenticator: Send + Sync {
    /// Returns the matching user, or `None` when the pair is not recognized.
    fn verify(&self, identifier: &str, secret: &str) -> Option<User>;
}

/// Error returned when an account document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid account document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate account identifier: {0}")]
    Duplicate(String),
}

/// Stored credentials for one user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub user: User,
    /// Lowercase hex SHA-256 of the secret.
    pub secret_sha256: String,
}

impl Account {
    #[must_use]
    pub fn new(user: User, secret: &str) -> Self {
        Self {
            user,
            secret_sha256: hash_secret(secret),
        }
    }
}

/// In-memory account store.
#[derive(Clone, Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<String, Account>,
}

impl AccountDirectory {
    /// Build a directory from `accounts`, keyed by normalized email.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Duplicate`] when two accounts normalize to the
    /// same identifier.
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Result<Self, AccountError> {
        let mut map = HashMap::new();
        for account in accounts {
            let key = normalize_identifier(&account.user.email);
            if map.contains_key(&key) {
                return Err(AccountError::Duplicate(key));
            }
            map.insert(key, account);
        }
        Ok(Self { accounts: map })
    }

    /// Parse a JSON array of [`Account`]s. Unknown roles are rejected here,
    /// before any session can be built from them.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError`] on malformed JSON, unknown roles, or duplicates.
    pub fn from_json(json: &str) -> Result<Self, AccountError> {
        let accounts: Vec<Account> = serde_json::from_str(json)?;
        Self::new(accounts)
    }

    /// The bundled demo accounts, one per role.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError`] if the bundled document is malformed.
    pub fn demo() -> Result<Self, AccountError> {
        Self::from_json(DEMO_ACCOUNTS_JSON)
    }

    /// Users in the directory, ordered by id.
    #[must_use]
    pub fn users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.accounts.values().map(|account| &account.user).collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }
}

impl Authenticator for AccountDirectory {
    fn verify(&self, identifier: &str, secret: &str) -> Option<User> {
        let account = self.accounts.get(&normalize_identifier(identifier))?;
        (account.secret_sha256 == hash_secret(secret)).then(|| account.user.clone())
    }
}

/// Trim and lowercase an email-style identifier.
#[must_use]
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_ascii_lowercase()
}

/// Lowercase hex SHA-256 digest of `secret`.
#[must_use]
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<String>()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
