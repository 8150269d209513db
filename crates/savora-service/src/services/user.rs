//! User service
//!
//! Profile reads and updates for the authenticated user, plus role grants.

use tracing::{info, instrument};

use savora_core::value_objects::Permissions;

use crate::dto::{CurrentUserResponse, UpdateUserRequest};

use super::context::{Actor, ServiceContext};
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the authenticated user's profile
    #[instrument(skip(self))]
    pub async fn get_current(&self, actor: &Actor) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor.id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Update the authenticated user's profile
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        actor: &Actor,
        request: UpdateUserRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor.id.to_string()))?;

        if let Some(username) = request.username {
            user.username = username;
        }
        if let Some(first_name) = request.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = request.last_name {
            user.last_name = Some(last_name);
        }

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = user.id, "User profile updated");

        Ok(CurrentUserResponse::from(&user))
    }

    /// Grant a role to a user. Requires MANAGE_USERS.
    #[instrument(skip(self))]
    pub async fn assign_role(&self, actor: &Actor, user_id: i64, role: &str) -> ServiceResult<()> {
        if !self.ctx.permissions_of(actor).has(Permissions::MANAGE_USERS) {
            return Err(ServiceError::permission_denied("MANAGE_USERS"));
        }

        // The target must exist before granting
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        self.ctx.user_repo().assign_role(user_id, role).await?;

        info!(user_id, role, "Role assigned");
        Ok(())
    }
}
