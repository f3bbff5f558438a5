use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::stores::InventoryStore;
use crate::types::db::inventory_item;
use crate::types::dto::inventory::{CreateInventoryItemRequest, UpdateInventoryItemRequest};
use crate::types::internal::{Campus, RequestContext};

pub struct InventoryCoordinator {
    db: DatabaseConnection,
    inventory_store: Arc<InventoryStore>,
}

impl InventoryCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            inventory_store: Arc::clone(&app_data.inventory_store),
        }
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        campus: Option<Campus>,
        category: Option<String>,
    ) -> Result<Vec<inventory_item::Model>, InternalError> {
        let category = category.filter(|c| !c.trim().is_empty());
        self.inventory_store
            .list(&self.db, ctx.scope(campus), category.as_deref())
            .await
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: CreateInventoryItemRequest,
    ) -> Result<inventory_item::Model, InternalError> {
        request.validate()?;

        let item = self
            .inventory_store
            .insert(&self.db, request.into_active_model(Utc::now()))
            .await?;

        tracing::info!(request_id = %ctx.request_id, actor = %ctx.actor_id, "Inventory item {} added", item.id);
        Ok(item)
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i32,
        request: UpdateInventoryItemRequest,
    ) -> Result<inventory_item::Model, InternalError> {
        request.validate()?;

        let current = self.inventory_store.get(&self.db, id).await?;
        let item = self
            .inventory_store
            .update(&self.db, request.apply(current, Utc::now()))
            .await?;

        if item.is_low_stock() {
            tracing::info!(request_id = %ctx.request_id, "Inventory item {} is low on stock ({})", item.id, item.quantity);
        }
        Ok(item)
    }
}
