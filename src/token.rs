//! Self-issued API token handling.
//!
//! The SyncFlow API authorizes clients with a bearer token the client signs
//! itself: an HMAC-SHA256 JWT over `{iat, iss, exp, projectId}` where the
//! issuer is the API key and the signing key is the shared API secret.
//! Tokens are valid for one hour from issuance.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Validity window for self-issued API tokens, in seconds.
pub const TOKEN_VALIDITY_SECS: i64 = 3600;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("failed to encode API token: {0}")]
    EncodingFailed(jsonwebtoken::errors::Error),
    /// Signature or structural failure while decoding a token. This is a
    /// hard error; an invalid token is never silently replaced.
    #[error("failed to verify API token: {0}")]
    VerificationFailed(jsonwebtoken::errors::Error),
}

/// Claims carried by a self-issued API token.
///
/// Invariant: `exp` is always `iat + TOKEN_VALIDITY_SECS` at issuance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTokenClaims {
    pub iat: i64,
    pub iss: String,
    pub exp: i64,
    #[serde(rename = "projectId")]
    pub project_id: String,
}

impl ProjectTokenClaims {
    pub fn new(api_key: &str, project_id: &str) -> ProjectTokenClaims {
        let now = unix_now();
        ProjectTokenClaims {
            iat: now,
            iss: api_key.to_string(),
            exp: now + TOKEN_VALIDITY_SECS,
            project_id: project_id.to_string(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.exp < unix_now()
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Issue a fresh signed token for the given project.
pub fn issue(api_key: &str, api_secret: &str, project_id: &str) -> Result<String, TokenError> {
    let claims = ProjectTokenClaims::new(api_key, project_id);
    jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(api_secret.as_bytes()),
    )
    .map_err(TokenError::EncodingFailed)
}

/// Decode and signature-verify a token.
///
/// Expiry is deliberately not validated here: whether an expired token gets
/// reissued is the caller's decision, while a bad signature must surface as
/// an error rather than trigger a reissue.
pub fn decode(token: &str, api_secret: &str) -> Result<ProjectTokenClaims, TokenError> {
    let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = false;

    jsonwebtoken::decode::<ProjectTokenClaims>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(api_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(TokenError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_round_trips() {
        let token = issue("key-1", SECRET, "p1").unwrap();
        let claims = decode(&token, SECRET).unwrap();

        assert_eq!(claims.iss, "key-1");
        assert_eq!(claims.project_id, "p1");
        assert_eq!(claims.exp, claims.iat + TOKEN_VALIDITY_SECS);
        assert!(!claims.is_expired());
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let token = issue("key-1", SECRET, "p1").unwrap();
        let result = decode(&token, "other-secret");

        assert!(matches!(result, Err(TokenError::VerificationFailed(_))));
    }

    #[test]
    fn forged_past_expiry_decodes_as_expired() {
        let claims = ProjectTokenClaims {
            iat: 1000,
            iss: "key-1".to_string(),
            exp: 2000,
            project_id: "p1".to_string(),
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let decoded = decode(&token, SECRET).unwrap();
        assert!(decoded.is_expired());
    }

    #[test]
    fn claims_serialize_project_id_as_camel_case() {
        let claims = ProjectTokenClaims::new("key-1", "p1");
        let value = serde_json::to_value(&claims).unwrap();

        assert!(value.get("projectId").is_some());
        assert!(value.get("project_id").is_none());
        assert!(value.get("iat").is_some());
    }
}
