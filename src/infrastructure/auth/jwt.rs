//! JWT token generation and validation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

use crate::domain::DomainError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (username)
    pub sub: String,
    /// Unique token identifier
    pub jti: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

impl JwtClaims {
    /// Create new claims for a username under the given configuration
    pub fn new(username: &str, config: &JwtConfig) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(config.expires_in_hours as i64);

        Self {
            sub: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Get the username from claims
    pub fn username(&self) -> &str {
        &self.sub
    }
}

/// Configuration for JWT service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Issuer stamped into and required from every token
    pub issuer: String,
    /// Audience stamped into and required from every token
    pub audience: String,
    /// Token expiration time in hours
    pub expires_in_hours: u64,
}

impl JwtConfig {
    /// Create new JWT configuration
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expires_in_hours: u64,
    ) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            expires_in_hours,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            issuer: "immunidash".to_string(),
            audience: "immunidash-clients".to_string(),
            expires_in_hours: 24,
        }
    }
}

/// Trait for JWT operations
pub trait JwtGenerator: Send + Sync + Debug {
    /// Generate a JWT token for a username
    fn generate(&self, username: &str) -> Result<String, DomainError>;

    /// Validate a JWT token and return the claims
    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError>;

    /// Get the token expiration time in hours
    fn expires_in_hours(&self) -> u64;
}

/// JWT service implementation using an HS256 shared secret
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Create a JWT service with default configuration
    pub fn with_default_config() -> Self {
        Self::new(JwtConfig::default())
    }
}

impl JwtGenerator for JwtService {
    fn generate(&self, username: &str) -> Result<String, DomainError> {
        let claims = JwtClaims::new(username, &self.config);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))
    }

    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| DomainError::unauthorized(format!("Invalid JWT: {}", e)))?;

        Ok(token_data.claims)
    }

    fn expires_in_hours(&self) -> u64 {
        self.config.expires_in_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_service() -> JwtService {
        JwtService::new(JwtConfig::new(
            "test-secret-key-12345",
            "immunidash",
            "immunidash-clients",
            24,
        ))
    }

    #[test]
    fn test_generate_and_validate() {
        let service = create_service();

        let token = service.generate("admin").unwrap();
        assert!(!token.is_empty());

        let claims = service.validate(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iss, "immunidash");
        assert_eq!(claims.aud, "immunidash-clients");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_each_token_gets_a_fresh_jti() {
        let service = create_service();

        let first = service
            .validate(&service.generate("admin").unwrap())
            .unwrap();
        let second = service
            .validate(&service.generate("admin").unwrap())
            .unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_service();

        let result = service.validate("invalid-token");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new(JwtConfig::new(
            "secret-1",
            "immunidash",
            "immunidash-clients",
            24,
        ));
        let service2 = JwtService::new(JwtConfig::new(
            "secret-2",
            "immunidash",
            "immunidash-clients",
            24,
        ));

        let token = service1.generate("admin").unwrap();

        // Token generated with different secret should fail validation
        let result = service2.validate(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let signing = JwtService::new(JwtConfig::new(
            "shared-secret",
            "someone-else",
            "immunidash-clients",
            24,
        ));
        let validating = JwtService::new(JwtConfig::new(
            "shared-secret",
            "immunidash",
            "immunidash-clients",
            24,
        ));

        let token = signing.generate("admin").unwrap();

        let result = validating.validate(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let signing = JwtService::new(JwtConfig::new(
            "shared-secret",
            "immunidash",
            "other-clients",
            24,
        ));
        let validating = create_service();

        let token = signing.generate("admin").unwrap();

        let result = validating.validate(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token() {
        use jsonwebtoken::{encode, Header};

        let service = JwtService::new(JwtConfig::new(
            "test-secret",
            "immunidash",
            "immunidash-clients",
            24,
        ));

        let now = Utc::now();
        let claims = JwtClaims {
            sub: "admin".to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: (now - Duration::hours(48)).timestamp(),
            exp: (now - Duration::hours(24)).timestamp(),
            iss: "immunidash".to_string(),
            aud: "immunidash-clients".to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        let result = service.validate(&token);
        assert!(result.is_err());
    }
}
