//! Current user lookup
//!
//! The report flow only needs to know who is signed in, if anyone. Sessions
//! are HS256 JWTs issued by the authentication backend; an invalid or expired
//! token counts as no session.

use async_trait::async_trait;
use foundcard_core::models::Identity;
use foundcard_core::{AppError, Config};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, or `None` when there is no valid session
    async fn current_user(&self) -> Option<Identity>;
}

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid, // user_id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

/// Identity backed by the session token of the running client
pub struct JwtSessionIdentity {
    decoding_key: DecodingKey,
    validation: Validation,
    token: RwLock<Option<String>>,
}

impl JwtSessionIdentity {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token: RwLock::new(None),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret)
    }

    /// Store the access token of a new session
    pub async fn sign_in(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    pub async fn sign_out(&self) {
        *self.token.write().await = None;
    }

    /// Validate and decode a session token
    pub fn decode_token(&self, token: &str) -> Result<SessionClaims, AppError> {
        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::Unauthorized("Token has expired".to_string())
                    }
                    _ => AppError::Unauthorized(format!("Invalid session token: {}", e)),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[async_trait]
impl IdentityProvider for JwtSessionIdentity {
    async fn current_user(&self) -> Option<Identity> {
        let token = self.token.read().await.clone()?;

        match self.decode_token(&token) {
            Ok(claims) => Some(Identity {
                user_id: claims.sub,
                email: claims.email,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected");
                None
            }
        }
    }
}
