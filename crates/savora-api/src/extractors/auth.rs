//! Authentication extractor
//!
//! Extracts and validates JWT access tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use savora_service::Actor;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a fully validated access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the `uid` claim
    pub user_id: i64,
    /// Role names from the `roles` claim
    pub roles: Vec<String>,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: i64, roles: Vec<String>) -> Self {
        Self { user_id, roles }
    }

    /// The service-layer actor for this request
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.roles.clone())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Full validation here, expiry included; the refresh endpoint is the
        // only place expired tokens are accepted, and it does not use this
        // extractor.
        let claims = app_state.jwt_service().decode(bearer.token()).map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::App(e)
        })?;

        Ok(AuthUser::new(claims.uid, claims.roles))
    }
}
