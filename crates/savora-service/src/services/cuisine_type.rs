//! Cuisine type service

use chrono::Utc;
use tracing::{info, instrument};

use savora_core::entities::CuisineType;
use savora_core::error::DomainError;
use savora_core::search::SearchArgs;
use savora_core::value_objects::Permissions;

use crate::dto::{CreateCuisineTypeRequest, CuisineTypeResponse, PagedResponse, UpdateCuisineTypeRequest};

use super::context::{Actor, ServiceContext};
use super::error::{ServiceError, ServiceResult};

/// Cuisine type service
pub struct CuisineTypeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CuisineTypeService<'a> {
    /// Create a new CuisineTypeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn require_manage(&self, actor: &Actor) -> ServiceResult<()> {
        if !self
            .ctx
            .permissions_of(actor)
            .has(Permissions::MANAGE_CUISINES)
        {
            return Err(ServiceError::permission_denied("MANAGE_CUISINES"));
        }
        Ok(())
    }

    /// Create a cuisine type. Requires MANAGE_CUISINES.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateCuisineTypeRequest,
    ) -> ServiceResult<CuisineTypeResponse> {
        self.require_manage(actor)?;

        let now = Utc::now();
        let mut cuisine = CuisineType {
            id: 0,
            name: request.name,
            created_at: now,
            updated_at: now,
        };

        cuisine.id = self.ctx.cuisine_type_repo().create(&cuisine).await?;

        info!(cuisine_type_id = cuisine.id, "Cuisine type created");

        Ok(CuisineTypeResponse::from(cuisine))
    }

    /// Get a cuisine type by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<CuisineTypeResponse> {
        let cuisine = self
            .ctx
            .cuisine_type_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CuisineTypeNotFound(id))?;

        Ok(CuisineTypeResponse::from(cuisine))
    }

    /// Rename a cuisine type. Requires MANAGE_CUISINES.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        request: UpdateCuisineTypeRequest,
    ) -> ServiceResult<CuisineTypeResponse> {
        self.require_manage(actor)?;

        let mut cuisine = self
            .ctx
            .cuisine_type_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CuisineTypeNotFound(id))?;

        cuisine.name = request.name;

        self.ctx.cuisine_type_repo().update(&cuisine).await?;

        info!(cuisine_type_id = id, "Cuisine type updated");

        Ok(CuisineTypeResponse::from(cuisine))
    }

    /// Delete a cuisine type. Requires MANAGE_CUISINES.
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        self.require_manage(actor)?;

        self.ctx.cuisine_type_repo().delete(id).await?;

        info!(cuisine_type_id = id, "Cuisine type deleted");
        Ok(())
    }

    /// Paged search over all cuisine types
    #[instrument(skip(self, args))]
    pub async fn search(
        &self,
        args: &SearchArgs,
    ) -> ServiceResult<PagedResponse<CuisineTypeResponse>> {
        let page = self.ctx.cuisine_type_repo().search(args).await?;
        Ok(PagedResponse::from_page(page, CuisineTypeResponse::from))
    }
}
