use crate::auth::models::{AuthContext, AuthMethod, JwtClaims};
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use mediagate_core::{AppError, Config};
use std::sync::Arc;
use subtle::ConstantTimeEq;

const MASTER_KEY_SUBJECT: &str = "master";

#[derive(Clone)]
pub struct AuthState {
    pub master_api_key: Option<String>,
    pub jwt_secret: Option<String>,
}

impl AuthState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            master_api_key: config.master_api_key.clone(),
            jwt_secret: config.jwt_secret.clone(),
        }
    }

    /// Resolve a bearer token to a caller identity.
    pub fn authenticate(&self, token: &str) -> Result<AuthContext, AppError> {
        if let Some(ref master_api_key) = self.master_api_key {
            if secure_compare(token, master_api_key) {
                return Ok(AuthContext {
                    subject: MASTER_KEY_SUBJECT.to_string(),
                    method: AuthMethod::MasterKey,
                });
            }
        }

        let secret = self
            .jwt_secret
            .as_deref()
            .ok_or_else(|| AppError::Unauthorized("Not authorized, token failed".to_string()))?;
        let claims = validate_jwt(token, secret)?;

        Ok(AuthContext {
            subject: claims.sub,
            method: AuthMethod::Jwt,
        })
    }
}

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Validate and decode an HS256 token
pub fn validate_jwt(token: &str, secret: &str) -> Result<JwtClaims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!("JWT validation failed: {}", e);
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::Unauthorized("Not authorized, token expired".to_string())
            }
            _ => AppError::Unauthorized("Not authorized, token failed".to_string()),
        }
    })?;

    Ok(token_data.claims)
}

pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if !token.trim().is_empty() => token.trim().to_string(),
        _ => {
            return HttpAppError(AppError::Unauthorized(
                "Not authorized, no token".to_string(),
            ))
            .into_response();
        }
    };

    match auth_state.authenticate(&token) {
        Ok(auth_context) => {
            tracing::debug!(
                subject = %auth_context.subject,
                method = %auth_context.method,
                "Request authenticated"
            );
            request.extensions_mut().insert(auth_context);
            next.run(request).await
        }
        Err(e) => HttpAppError(e).into_response(),
    }
}
