//! Identity-provider seam.
//!
//! The hosted identity service (credential exchange, signup, confirmation
//! codes) is an external collaborator; this trait is the boundary the rest
//! of Libris calls through. `MockIdentityProvider` backs tests with an
//! in-memory credential table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::Mutex;

use libris_core::{Error, Result};

/// Tokens returned by a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub id_token: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Abstraction over hosted identity providers.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange credentials for a token set.
    ///
    /// # Errors
    ///
    /// `Error::Unauthorized` for bad credentials; `Error::Forbidden` for
    /// unconfirmed accounts.
    async fn authenticate(&self, username: &str, password: &str) -> Result<TokenSet>;

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// `Error::Conflict` when the username is taken.
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<()>;

    /// Confirm a registration with the emailed code.
    ///
    /// # Errors
    ///
    /// `Error::InvalidData` for a wrong code; `Error::NotFound` for an
    /// unknown user.
    async fn confirm(&self, username: &str, code: &str) -> Result<()>;
}

/// In-memory identity provider for tests and embedded use.
///
/// Every registration expects the fixed confirmation code
/// [`MockIdentityProvider::CONFIRMATION_CODE`].
pub struct MockIdentityProvider {
    users: Mutex<HashMap<String, MockUser>>,
}

struct MockUser {
    email: String,
    password: String,
    confirmed: bool,
}

impl MockIdentityProvider {
    /// The code `confirm` accepts.
    pub const CONFIRMATION_CODE: &'static str = "000000";

    /// Create an empty provider.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    /// The email a user registered with, when known.
    pub async fn registered_email(&self, username: &str) -> Option<String> {
        let users = self.users.lock().await;
        users.get(username).map(|u| u.email.clone())
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn authenticate(&self, username: &str, password: &str) -> Result<TokenSet> {
        let users = self.users.lock().await;
        let user = users
            .get(username)
            .ok_or_else(|| Error::unauthorized("Invalid username or password"))?;

        if user.password != password {
            return Err(Error::unauthorized("Invalid username or password"));
        }
        if !user.confirmed {
            return Err(Error::forbidden("User account not confirmed"));
        }

        Ok(TokenSet {
            id_token: format!("mock-id-{username}"),
            access_token: format!("mock-access-{username}"),
            refresh_token: format!("mock-refresh-{username}"),
        })
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let mut users = self.users.lock().await;
        if users.contains_key(username) {
            return Err(Error::conflict("User already exists"));
        }
        users.insert(
            username.to_string(),
            MockUser {
                email: email.to_string(),
                password: password.to_string(),
                confirmed: false,
            },
        );
        Ok(())
    }

    async fn confirm(&self, username: &str, code: &str) -> Result<()> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(username)
            .ok_or_else(|| Error::not_found("User not found"))?;

        if code != Self::CONFIRMATION_CODE {
            return Err(Error::invalid_data("Invalid confirmation code"));
        }
        user.confirmed = true;
        Ok(())
    }
}
