use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::SecretManager;
use crate::errors::internal::TokenError;
use crate::errors::InternalError;
use crate::types::internal::auth::Claims;
use crate::types::internal::Campus;

/// Validates staff bearer tokens (HS256, shared secret)
///
/// Tokens are normally minted by the external identity provider; `issue`
/// exists for the CLI and for tests.
pub struct TokenProvider {
    secret_manager: Arc<SecretManager>,
}

impl TokenProvider {
    pub fn new(secret_manager: Arc<SecretManager>) -> Self {
        Self { secret_manager }
    }

    /// Validate a JWT and return its claims
    pub fn validate(&self, token: &str) -> Result<Claims, InternalError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_manager.jwt_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => InternalError::from(TokenError::Expired),
            _ => {
                tracing::debug!("Rejected bearer token: {}", e);
                InternalError::from(TokenError::invalid("invalid signature or malformed"))
            }
        })
    }

    /// Mint a token for `subject` valid for `ttl_minutes`
    pub fn issue(
        &self,
        subject: &str,
        name: Option<String>,
        campus: Option<Campus>,
        ttl_minutes: i64,
    ) -> Result<String, InternalError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            exp: now + ttl_minutes * 60,
            iat: now,
            name,
            campus: campus.map(|c| c.as_str().to_string()),
            role: Some("staff".to_string()),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret_manager.jwt_secret().as_bytes()),
        )
        .map_err(|e| TokenError::invalid(format!("failed to sign token: {}", e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    fn provider(secret: &str) -> TokenProvider {
        let env = MockEnvironment::empty().with_var("JWT_SECRET", secret);
        TokenProvider::new(Arc::new(SecretManager::from_env_provider(&env).unwrap()))
    }

    const SECRET: &str = "academy-test-secret-that-is-long-enough";

    #[test]
    fn test_issued_token_validates() {
        let provider = provider(SECRET);
        let token = provider
            .issue("staff-1", Some("Kai".to_string()), Some(Campus::Hilo), 15)
            .unwrap();

        let claims = provider.validate(&token).unwrap();
        assert_eq!(claims.sub, "staff-1");
        assert_eq!(claims.campus.as_deref(), Some("hilo"));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let provider = provider(SECRET);
        // Beyond the default 60s leeway
        let token = provider.issue("staff-1", None, None, -10).unwrap();

        let err = provider.validate(&token).unwrap_err();
        assert!(matches!(err, InternalError::Token(TokenError::Expired)));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = provider("another-secret-of-at-least-32-characters!")
            .issue("staff-1", None, None, 15)
            .unwrap();

        let err = provider(SECRET).validate(&token).unwrap_err();
        assert!(matches!(err, InternalError::Token(TokenError::Invalid { .. })));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = provider(SECRET).validate("not.a.jwt").unwrap_err();
        assert!(matches!(err, InternalError::Token(TokenError::Invalid { .. })));
    }
}
