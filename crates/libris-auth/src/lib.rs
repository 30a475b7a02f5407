//! Libris Auth — thin role-based gate over a hosted identity provider.
//!
//! The identity provider itself (user pool, token issuance, confirmation
//! emails) is an external collaborator. This crate covers the pieces the
//! catalog boundary needs locally: validating bearer tokens against the
//! provider's published JWKS, reading group claims, and enforcing a
//! required role.
//!
//! # Modules
//!
//! - [`claims`]: Decoded token claims and group lookup
//! - [`validator`]: JWKS-backed token validation
//! - [`guard`]: Role enforcement over validated claims
//! - [`provider`]: Identity-provider seam and in-memory mock

pub mod claims;
pub mod guard;
pub mod provider;
pub mod validator;

pub use claims::Claims;
pub use guard::RoleGuard;
pub use provider::{IdentityProvider, MockIdentityProvider, TokenSet};
pub use validator::{TokenValidator, ValidatorConfig};
