//! Restaurant service

use chrono::Utc;
use tracing::{info, instrument};

use savora_core::entities::Restaurant;
use savora_core::error::DomainError;
use savora_core::search::SearchArgs;
use savora_core::value_objects::Permissions;

use crate::dto::{CreateRestaurantRequest, PagedResponse, RestaurantResponse, UpdateRestaurantRequest};

use super::context::{Actor, ServiceContext};
use super::error::{ServiceError, ServiceResult};

/// Restaurant service
pub struct RestaurantService<'a> {
    ctx: &'a ServiceContext,
}

/// Check that `actor` owns `restaurant_id`, with an administrator bypass.
/// Shared by the branch, menu, and menu item services, which all anchor
/// their ownership chain at the restaurant.
pub(crate) async fn ensure_restaurant_owner(
    ctx: &ServiceContext,
    actor: &Actor,
    restaurant_id: i64,
) -> ServiceResult<Restaurant> {
    let restaurant = ctx
        .restaurant_repo()
        .find_by_id(restaurant_id)
        .await?
        .ok_or(DomainError::RestaurantNotFound(restaurant_id))?;

    if restaurant.owner_id != actor.id
        && !ctx.permissions_of(actor).has(Permissions::ADMINISTRATOR)
    {
        return Err(DomainError::NotRestaurantOwner.into());
    }

    Ok(restaurant)
}

impl<'a> RestaurantService<'a> {
    /// Create a new RestaurantService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a restaurant owned by the actor. Requires MANAGE_RESTAURANTS.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateRestaurantRequest,
    ) -> ServiceResult<RestaurantResponse> {
        if !self
            .ctx
            .permissions_of(actor)
            .has(Permissions::MANAGE_RESTAURANTS)
        {
            return Err(ServiceError::permission_denied("MANAGE_RESTAURANTS"));
        }

        let now = Utc::now();
        let mut restaurant = Restaurant {
            id: 0,
            owner_id: actor.id,
            name: request.name,
            description: request.description,
            created_at: now,
            updated_at: now,
        };

        restaurant.id = self.ctx.restaurant_repo().create(&restaurant).await?;

        info!(restaurant_id = restaurant.id, "Restaurant created");

        Ok(RestaurantResponse::from(restaurant))
    }

    /// Get a restaurant by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<RestaurantResponse> {
        let restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::RestaurantNotFound(id))?;

        Ok(RestaurantResponse::from(restaurant))
    }

    /// Update a restaurant. Only the owner (or an administrator) may.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        request: UpdateRestaurantRequest,
    ) -> ServiceResult<RestaurantResponse> {
        let mut restaurant = ensure_restaurant_owner(self.ctx, actor, id).await?;

        if let Some(name) = request.name {
            restaurant.name = name;
        }
        if let Some(description) = request.description {
            restaurant.description = Some(description);
        }

        self.ctx.restaurant_repo().update(&restaurant).await?;

        info!(restaurant_id = id, "Restaurant updated");

        Ok(RestaurantResponse::from(restaurant))
    }

    /// Delete a restaurant. Only the owner (or an administrator) may.
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        ensure_restaurant_owner(self.ctx, actor, id).await?;

        self.ctx.restaurant_repo().delete(id).await?;

        info!(restaurant_id = id, "Restaurant deleted");
        Ok(())
    }

    /// Paged search over all restaurants
    #[instrument(skip(self, args))]
    pub async fn search(&self, args: &SearchArgs) -> ServiceResult<PagedResponse<RestaurantResponse>> {
        let page = self.ctx.restaurant_repo().search(args).await?;
        Ok(PagedResponse::from_page(page, RestaurantResponse::from))
    }
}
