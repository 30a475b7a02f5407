//! Role enforcement over validated claims.

use libris_core::{Error, Result};

use crate::claims::Claims;

/// Requires a single role for an operation.
///
/// The caller boundary validates the bearer token first, then passes the
/// claims through the guard for the route's required role.
#[derive(Debug, Clone)]
pub struct RoleGuard {
    allowed_role: String,
}

impl RoleGuard {
    /// Create a guard requiring the given role.
    pub fn new(allowed_role: impl Into<String>) -> Self {
        Self {
            allowed_role: allowed_role.into(),
        }
    }

    /// The role this guard requires.
    pub fn allowed_role(&self) -> &str {
        &self.allowed_role
    }

    /// Check that the claims carry the required role.
    ///
    /// # Errors
    ///
    /// `Error::Forbidden` when the group claim lacks the role.
    pub fn check(&self, claims: &Claims) -> Result<()> {
        if claims.has_group(&self.allowed_role) {
            Ok(())
        } else {
            Err(Error::forbidden("Insufficient permissions"))
        }
    }

    /// Check an optional bearer's claims, mapping an absent token to
    /// `Error::Unauthorized` the way the boundary treats a missing
    /// Authorization header.
    pub fn check_optional(&self, claims: Option<&Claims>) -> Result<()> {
        match claims {
            Some(claims) => self.check(claims),
            None => Err(Error::unauthorized("Not authenticated")),
        }
    }
}
