use crate::error::ErrorResponse;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// How the caller was authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    MasterKey,
    Jwt,
}

impl Display for AuthMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AuthMethod::MasterKey => write!(f, "master_key"),
            AuthMethod::Jwt => write!(f, "jwt"),
        }
    }
}

/// JWT claims structure (HS256)
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: i64, // expiration timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Caller identity stored in request extensions by the auth middleware
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub subject: String,
    pub method: AuthMethod,
}

// Extension cannot be combined with Multipart, so the context is read from request parts
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new(
                        "Not authorized, no token",
                        "MISSING_AUTH_CONTEXT",
                    )),
                )
            })
    }
}
