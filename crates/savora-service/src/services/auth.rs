//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout. Every
//! access token is paired with one single-use refresh token row; the
//! refresh flow checks the chain of rejection reasons in a fixed order
//! and then redeems the row with a conditional update so concurrent
//! redemptions cannot both succeed.

use chrono::{Months, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use savora_common::auth::{hash_password, validate_password_strength, verify_password, TokenPair};
use savora_common::AppError;
use savora_core::entities::User;
use savora_core::traits::RefreshToken;

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, LogoutRequest, RefreshTokenRequest,
    RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Role granted to every new account
const DEFAULT_ROLE: &str = "customer";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let now = Utc::now();
        let mut user = User {
            id: 0, // assigned by the database
            email: request.email,
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            roles: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        user.id = self.ctx.user_repo().create(&user, &password_hash).await?;

        self.ctx
            .user_repo()
            .assign_role(user.id, DEFAULT_ROLE)
            .await?;
        user.roles.push(DEFAULT_ROLE.to_string());

        info!(user_id = user.id, "User registered successfully");

        let token_pair = self.issue_tokens(&user).await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = user.id, "User logged in successfully");

        let token_pair = self.issue_tokens(&user).await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Exchange an expired access token plus its paired refresh token for a
    /// fresh pair.
    ///
    /// The rejection checks run in a fixed order and each failure carries
    /// the exact reason handed back to the client. The redemption itself is
    /// a conditional update; when it reports no row changed, a concurrent
    /// redemption won and the token counts as used.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        // Signature, structure, and algorithm must hold; expiry is checked
        // separately because an expired access token is the expected input.
        let claims = self
            .ctx
            .jwt_service()
            .decode_ignoring_expiry(&request.access_token)
            .map_err(|_| ServiceError::RefreshRejected("Invalid Token"))?;

        if !claims.is_expired() {
            return Err(ServiceError::RefreshRejected(
                "This token hasn't expired yet",
            ));
        }

        let stored = self
            .ctx
            .refresh_token_repo()
            .find_by_id(&request.refresh_token)
            .await?
            .ok_or(ServiceError::RefreshRejected(
                "This refresh token does not exist",
            ))?;

        if stored.is_expired() {
            return Err(ServiceError::RefreshRejected(
                "This refresh token has expired",
            ));
        }

        if stored.invalidated {
            return Err(ServiceError::RefreshRejected(
                "This refresh token has been invalidated",
            ));
        }

        if stored.used {
            return Err(ServiceError::RefreshRejected(
                "This refresh token has been used",
            ));
        }

        if stored.jwt_id != claims.jti {
            return Err(ServiceError::RefreshRejected(
                "This refresh token does not match this JWT",
            ));
        }

        if !self
            .ctx
            .refresh_token_repo()
            .redeem(&request.refresh_token)
            .await?
        {
            // Lost the race against a concurrent redemption.
            return Err(ServiceError::RefreshRejected(
                "This refresh token has been used",
            ));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(stored.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", stored.user_id.to_string()))?;

        let token_pair = self.issue_tokens(&user).await?;

        info!(user_id = user.id, "Tokens refreshed successfully");

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Logout by invalidating one refresh token, or all of the user's live
    /// tokens when none is named
    #[instrument(skip(self, request))]
    pub async fn logout(&self, user_id: i64, request: LogoutRequest) -> ServiceResult<()> {
        match request.refresh_token {
            Some(token_id) => {
                self.ctx.refresh_token_repo().invalidate(&token_id).await?;
            }
            None => {
                let count = self
                    .ctx
                    .refresh_token_repo()
                    .invalidate_all_for_user(user_id)
                    .await?;
                info!(user_id, count, "Invalidated all refresh tokens");
            }
        }

        info!(user_id, "User logged out successfully");
        Ok(())
    }

    /// Sign a new access token and persist its paired refresh token
    async fn issue_tokens(&self, user: &User) -> ServiceResult<TokenPair> {
        let signed = self
            .ctx
            .jwt_service()
            .sign(user.id, &user.username, &user.email, user.roles.clone())
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let now = Utc::now();
        let expires_at = now
            .checked_add_months(Months::new(self.ctx.refresh_token_expiry_months()))
            .ok_or_else(|| ServiceError::internal("refresh token expiry overflow"))?;

        let refresh = RefreshToken {
            id: Uuid::new_v4().to_string(),
            jwt_id: signed.jti,
            user_id: user.id,
            created_at: now,
            expires_at,
            used: false,
            invalidated: false,
        };

        self.ctx.refresh_token_repo().create(&refresh).await?;

        Ok(TokenPair::new(
            signed.token,
            refresh.id,
            self.ctx.jwt_service().access_token_expiry(),
        ))
    }
}
