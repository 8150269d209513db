//! Menu item service

use chrono::Utc;
use tracing::{info, instrument};

use savora_core::entities::MenuItem;
use savora_core::error::DomainError;
use savora_core::search::SearchArgs;
use savora_core::value_objects::Permissions;

use crate::dto::{CreateMenuItemRequest, MenuItemResponse, PagedResponse, UpdateMenuItemRequest};

use super::context::{Actor, ServiceContext};
use super::error::{ServiceError, ServiceResult};
use super::restaurant::ensure_restaurant_owner;

/// Menu item service
pub struct MenuItemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MenuItemService<'a> {
    /// Create a new MenuItemService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn require_manage(&self, actor: &Actor) -> ServiceResult<()> {
        if !self.ctx.permissions_of(actor).has(Permissions::MANAGE_MENUS) {
            return Err(ServiceError::permission_denied("MANAGE_MENUS"));
        }
        Ok(())
    }

    /// Walk menu -> branch -> restaurant and check ownership
    async fn ensure_menu_owner(&self, actor: &Actor, menu_id: i64) -> ServiceResult<()> {
        let menu = self
            .ctx
            .menu_repo()
            .find_by_id(menu_id)
            .await?
            .ok_or(DomainError::MenuNotFound(menu_id))?;

        let branch = self
            .ctx
            .branch_repo()
            .find_by_id(menu.branch_id)
            .await?
            .ok_or(DomainError::BranchNotFound(menu.branch_id))?;

        ensure_restaurant_owner(self.ctx, actor, branch.restaurant_id).await?;
        Ok(())
    }

    /// Create a menu item. Requires MANAGE_MENUS and ownership.
    #[instrument(skip(self, request), fields(menu_id = request.menu_id))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateMenuItemRequest,
    ) -> ServiceResult<MenuItemResponse> {
        self.require_manage(actor)?;
        self.ensure_menu_owner(actor, request.menu_id).await?;

        let now = Utc::now();
        let mut item = MenuItem {
            id: 0,
            menu_id: request.menu_id,
            name: request.name,
            description: request.description,
            price_cents: request.price_cents,
            created_at: now,
            updated_at: now,
        };

        item.id = self.ctx.menu_item_repo().create(&item).await?;

        info!(menu_item_id = item.id, "Menu item created");

        Ok(MenuItemResponse::from(item))
    }

    /// Get a menu item by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<MenuItemResponse> {
        let item = self
            .ctx
            .menu_item_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(id))?;

        Ok(MenuItemResponse::from(item))
    }

    /// Update a menu item. Requires MANAGE_MENUS and ownership.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        request: UpdateMenuItemRequest,
    ) -> ServiceResult<MenuItemResponse> {
        self.require_manage(actor)?;

        let mut item = self
            .ctx
            .menu_item_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(id))?;

        self.ensure_menu_owner(actor, item.menu_id).await?;

        if let Some(name) = request.name {
            item.name = name;
        }
        if let Some(description) = request.description {
            item.description = Some(description);
        }
        if let Some(price_cents) = request.price_cents {
            item.price_cents = price_cents;
        }

        self.ctx.menu_item_repo().update(&item).await?;

        info!(menu_item_id = id, "Menu item updated");

        Ok(MenuItemResponse::from(item))
    }

    /// Delete a menu item. Requires MANAGE_MENUS and ownership.
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        self.require_manage(actor)?;

        let item = self
            .ctx
            .menu_item_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(id))?;

        self.ensure_menu_owner(actor, item.menu_id).await?;

        self.ctx.menu_item_repo().delete(id).await?;

        info!(menu_item_id = id, "Menu item deleted");
        Ok(())
    }

    /// Paged search over the items of one menu
    #[instrument(skip(self, args))]
    pub async fn search_by_menu(
        &self,
        menu_id: i64,
        args: &SearchArgs,
    ) -> ServiceResult<PagedResponse<MenuItemResponse>> {
        self.ctx
            .menu_repo()
            .find_by_id(menu_id)
            .await?
            .ok_or(DomainError::MenuNotFound(menu_id))?;

        let page = self.ctx.menu_item_repo().search_by_menu(menu_id, args).await?;
        Ok(PagedResponse::from_page(page, MenuItemResponse::from))
    }
}
