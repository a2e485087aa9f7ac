use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use business::domain::shared::identity::{Identity, Role};
use business::domain::shared::value_objects::UserId;
use business::domain::user::errors::UserError;
use business::domain::user::model::User;
use business::domain::user::services::{AccessToken, TokenIssuer};

use crate::error::AuthError;

pub const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 token service: issues tokens on login and turns verified bearer
/// tokens back into an `Identity`.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration: Duration,
}

impl JwtTokenService {
    pub fn new(config: &JwtConfig) -> Result<Self, AuthError> {
        if config.secret.len() < MIN_SECRET_LENGTH {
            return Err(AuthError::SecretTooShort);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expiration: config.expiration,
        })
    }

    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Encoding(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let user_id: UserId = data
            .claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidSubject)?;
        let roles = data
            .claims
            .roles
            .iter()
            .map(|r| r.parse::<Role>().map_err(|_| AuthError::UnknownRole(r.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Identity::new(user_id, roles))
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, user: &User) -> Result<AccessToken, UserError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.expiration;
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.to_string(),
            roles: user.roles.iter().map(Role::to_string).collect(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = self.encode_claims(&claims).map_err(|e| {
            tracing::error!("Failed to sign token for user {}: {}", user.id, e);
            UserError::TokenIssuing(e.to_string())
        })?;

        Ok(AccessToken { token, expires_at })
    }
}
