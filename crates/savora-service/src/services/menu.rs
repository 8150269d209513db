//! Menu service

use chrono::Utc;
use tracing::{info, instrument};

use savora_core::entities::Menu;
use savora_core::error::DomainError;
use savora_core::search::SearchArgs;
use savora_core::value_objects::Permissions;

use crate::dto::{CreateMenuRequest, MenuResponse, PagedResponse, UpdateMenuRequest};

use super::context::{Actor, ServiceContext};
use super::error::{ServiceError, ServiceResult};
use super::restaurant::ensure_restaurant_owner;

/// Menu service
pub struct MenuService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MenuService<'a> {
    /// Create a new MenuService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn require_manage(&self, actor: &Actor) -> ServiceResult<()> {
        if !self.ctx.permissions_of(actor).has(Permissions::MANAGE_MENUS) {
            return Err(ServiceError::permission_denied("MANAGE_MENUS"));
        }
        Ok(())
    }

    /// Check the actor owns the restaurant a branch belongs to
    async fn ensure_branch_owner(&self, actor: &Actor, branch_id: i64) -> ServiceResult<()> {
        let branch = self
            .ctx
            .branch_repo()
            .find_by_id(branch_id)
            .await?
            .ok_or(DomainError::BranchNotFound(branch_id))?;

        ensure_restaurant_owner(self.ctx, actor, branch.restaurant_id).await?;
        Ok(())
    }

    /// Create a menu. Requires MANAGE_MENUS and ownership of the branch's
    /// restaurant.
    #[instrument(skip(self, request), fields(branch_id = request.branch_id))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateMenuRequest,
    ) -> ServiceResult<MenuResponse> {
        self.require_manage(actor)?;
        self.ensure_branch_owner(actor, request.branch_id).await?;

        let now = Utc::now();
        let mut menu = Menu {
            id: 0,
            branch_id: request.branch_id,
            name: request.name,
            description: request.description,
            active: true,
            created_at: now,
            updated_at: now,
        };

        menu.id = self.ctx.menu_repo().create(&menu).await?;

        info!(menu_id = menu.id, "Menu created");

        Ok(MenuResponse::from(menu))
    }

    /// Get a menu by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<MenuResponse> {
        let menu = self
            .ctx
            .menu_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuNotFound(id))?;

        Ok(MenuResponse::from(menu))
    }

    /// Update a menu. Requires MANAGE_MENUS and ownership.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        request: UpdateMenuRequest,
    ) -> ServiceResult<MenuResponse> {
        self.require_manage(actor)?;

        let mut menu = self
            .ctx
            .menu_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuNotFound(id))?;

        self.ensure_branch_owner(actor, menu.branch_id).await?;

        if let Some(name) = request.name {
            menu.name = name;
        }
        if let Some(description) = request.description {
            menu.description = Some(description);
        }
        if let Some(active) = request.active {
            menu.active = active;
        }

        self.ctx.menu_repo().update(&menu).await?;

        info!(menu_id = id, "Menu updated");

        Ok(MenuResponse::from(menu))
    }

    /// Delete a menu. Requires MANAGE_MENUS and ownership.
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        self.require_manage(actor)?;

        let menu = self
            .ctx
            .menu_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuNotFound(id))?;

        self.ensure_branch_owner(actor, menu.branch_id).await?;

        self.ctx.menu_repo().delete(id).await?;

        info!(menu_id = id, "Menu deleted");
        Ok(())
    }

    /// Paged search over the menus of one branch
    #[instrument(skip(self, args))]
    pub async fn search_by_branch(
        &self,
        branch_id: i64,
        args: &SearchArgs,
    ) -> ServiceResult<PagedResponse<MenuResponse>> {
        self.ctx
            .branch_repo()
            .find_by_id(branch_id)
            .await?
            .ok_or(DomainError::BranchNotFound(branch_id))?;

        let page = self.ctx.menu_repo().search_by_branch(branch_id, args).await?;
        Ok(PagedResponse::from_page(page, MenuResponse::from))
    }
}
