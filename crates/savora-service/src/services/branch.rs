//! Branch service

use chrono::Utc;
use tracing::{info, instrument};

use savora_core::entities::Branch;
use savora_core::error::DomainError;
use savora_core::search::SearchArgs;
use savora_core::value_objects::Permissions;

use crate::dto::{BranchResponse, CreateBranchRequest, PagedResponse, UpdateBranchRequest};

use super::context::{Actor, ServiceContext};
use super::error::{ServiceError, ServiceResult};
use super::restaurant::ensure_restaurant_owner;

/// Branch service
pub struct BranchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BranchService<'a> {
    /// Create a new BranchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load a branch and check the actor owns its restaurant
    async fn owned_branch(&self, actor: &Actor, id: i64) -> ServiceResult<Branch> {
        let branch = self
            .ctx
            .branch_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::BranchNotFound(id))?;

        ensure_restaurant_owner(self.ctx, actor, branch.restaurant_id).await?;
        Ok(branch)
    }

    /// Create a branch. Requires MANAGE_BRANCHES and restaurant ownership.
    #[instrument(skip(self, request), fields(restaurant_id = request.restaurant_id))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateBranchRequest,
    ) -> ServiceResult<BranchResponse> {
        if !self
            .ctx
            .permissions_of(actor)
            .has(Permissions::MANAGE_BRANCHES)
        {
            return Err(ServiceError::permission_denied("MANAGE_BRANCHES"));
        }

        ensure_restaurant_owner(self.ctx, actor, request.restaurant_id).await?;

        let now = Utc::now();
        let mut branch = Branch {
            id: 0,
            restaurant_id: request.restaurant_id,
            name: request.name,
            address: request.address,
            phone: request.phone,
            created_at: now,
            updated_at: now,
        };

        branch.id = self.ctx.branch_repo().create(&branch).await?;

        info!(branch_id = branch.id, "Branch created");

        Ok(BranchResponse::from(branch))
    }

    /// Get a branch by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<BranchResponse> {
        let branch = self
            .ctx
            .branch_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::BranchNotFound(id))?;

        Ok(BranchResponse::from(branch))
    }

    /// Update a branch. Requires restaurant ownership.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        request: UpdateBranchRequest,
    ) -> ServiceResult<BranchResponse> {
        let mut branch = self.owned_branch(actor, id).await?;

        if let Some(name) = request.name {
            branch.name = name;
        }
        if let Some(address) = request.address {
            branch.address = address;
        }
        if let Some(phone) = request.phone {
            branch.phone = Some(phone);
        }

        self.ctx.branch_repo().update(&branch).await?;

        info!(branch_id = id, "Branch updated");

        Ok(BranchResponse::from(branch))
    }

    /// Delete a branch. Requires restaurant ownership.
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        self.owned_branch(actor, id).await?;

        self.ctx.branch_repo().delete(id).await?;

        info!(branch_id = id, "Branch deleted");
        Ok(())
    }

    /// Paged search over all branches
    #[instrument(skip(self, args))]
    pub async fn search(&self, args: &SearchArgs) -> ServiceResult<PagedResponse<BranchResponse>> {
        let page = self.ctx.branch_repo().search(args).await?;
        Ok(PagedResponse::from_page(page, BranchResponse::from))
    }

    /// Paged search over the branches of one restaurant
    #[instrument(skip(self, args))]
    pub async fn search_by_restaurant(
        &self,
        restaurant_id: i64,
        args: &SearchArgs,
    ) -> ServiceResult<PagedResponse<BranchResponse>> {
        // 404 on an unknown restaurant rather than an empty page
        self.ctx
            .restaurant_repo()
            .find_by_id(restaurant_id)
            .await?
            .ok_or(DomainError::RestaurantNotFound(restaurant_id))?;

        let page = self
            .ctx
            .branch_repo()
            .search_by_restaurant(restaurant_id, args)
            .await?;
        Ok(PagedResponse::from_page(page, BranchResponse::from))
    }
}
