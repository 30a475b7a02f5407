//! Decoded token claims.

use serde::{Deserialize, Serialize};

/// Claims carried by a validated identity token.
///
/// Group membership arrives under the provider's namespaced claim
/// (`cognito:groups` for AWS user pools); it deserializes into `groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (stable user identifier).
    pub sub: String,

    /// Username, when the provider includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Group/role memberships.
    #[serde(default, rename = "cognito:groups")]
    pub groups: Vec<String>,

    /// Expiry as a unix timestamp.
    pub exp: u64,

    /// Audience the token was issued for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Issuer URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Whether the claim set includes the given group.
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_deserialize_from_namespaced_claim() {
        let json = r#"{
            "sub": "user-123",
            "username": "reader",
            "cognito:groups": ["Users", "Admins"],
            "exp": 4102444800
        }"#;
        let claims: Claims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.sub, "user-123");
        assert!(claims.has_group("Admins"));
        assert!(!claims.has_group("Auditors"));
    }

    #[test]
    fn test_missing_groups_default_empty() {
        let json = r#"{ "sub": "user-9", "exp": 4102444800 }"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert!(claims.groups.is_empty());
        assert!(!claims.has_group("Users"));
    }
}
