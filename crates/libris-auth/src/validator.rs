//! JWKS-backed token validation.
//!
//! The identity provider publishes its signing keys as a JSON Web Key Set
//! at a well-known URL. `TokenValidator` fetches that set once, then
//! validates bearer tokens locally: key lookup by `kid`, RS256 signature,
//! audience, and issuer.

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use log::debug;

use libris_core::{Error, Result};

use crate::claims::Claims;

/// Where the validator's trust comes from.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Expected issuer URL.
    pub issuer: String,
    /// Expected audience (the app client id).
    pub audience: String,
    /// JWKS endpoint.
    pub jwks_url: String,
}

impl ValidatorConfig {
    /// Config for an AWS Cognito-style user pool.
    pub fn for_user_pool(region: &str, user_pool_id: &str, client_id: &str) -> Self {
        let issuer = format!("https://cognito-idp.{region}.amazonaws.com/{user_pool_id}");
        Self {
            jwks_url: format!("{issuer}/.well-known/jwks.json"),
            issuer,
            audience: client_id.to_string(),
        }
    }
}

/// Validates identity tokens against a fetched JWKS.
pub struct TokenValidator {
    config: ValidatorConfig,
    jwks: JwkSet,
}

impl TokenValidator {
    /// Fetch the JWKS from the provider and build a validator.
    ///
    /// # Errors
    ///
    /// `Error::Http` when the JWKS endpoint is unreachable or does not
    /// return a parseable key set.
    pub async fn discover(config: ValidatorConfig) -> Result<Self> {
        debug!("fetching JWKS from {}", config.jwks_url);
        let response = reqwest::get(&config.jwks_url)
            .await
            .map_err(|e| Error::http(format!("Unable to fetch JWKS: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::http(format!(
                "Unable to fetch JWKS for token validation: HTTP {}",
                response.status()
            )));
        }

        let jwks: JwkSet = response
            .json()
            .await
            .map_err(|e| Error::http(format!("Invalid JWKS payload: {e}")))?;

        Ok(Self { config, jwks })
    }

    /// Build a validator from an already-known key set (tests, pinning).
    pub fn from_jwks(config: ValidatorConfig, jwks: JwkSet) -> Self {
        Self { config, jwks }
    }

    /// Validate and decode a bearer token.
    ///
    /// # Errors
    ///
    /// `Error::Unauthorized` for malformed tokens, unknown signing keys,
    /// bad signatures, wrong audience/issuer, or expiry.
    pub fn validate(&self, token: &str) -> Result<Claims> {
        let header = decode_header(token)
            .map_err(|e| Error::unauthorized(format!("Token validation error: {e}")))?;

        let kid = header
            .kid
            .ok_or_else(|| Error::unauthorized("Token has no key id"))?;

        let jwk = self
            .jwks
            .keys
            .iter()
            .find(|k| k.common.key_id.as_deref() == Some(kid.as_str()))
            .ok_or_else(|| Error::unauthorized("Invalid token signature"))?;

        let key = DecodingKey::from_jwk(jwk)
            .map_err(|e| Error::unauthorized(format!("Unusable signing key: {e}")))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.config.audience.as_str()]);
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let data = decode::<Claims>(token, &key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Error::unauthorized("Token has expired")
                }
                _ => Error::unauthorized(format!("Token validation error: {e}")),
            }
        })?;

        Ok(data.claims)
    }
}
