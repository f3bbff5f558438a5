use std::sync::Arc;

use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi,
};

use crate::api::{auth::staff_context, ApiTags, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::InventoryCoordinator;
use crate::errors::ApiError;
use crate::providers::TokenProvider;
use crate::types::dto::inventory::{
    CreateInventoryItemRequest, CreateInventoryItemResponse, InventoryItemResponse, UpdateInventoryItemRequest,
};
use crate::types::internal::Campus;

pub struct InventoryApi {
    coordinator: Arc<InventoryCoordinator>,
    token_provider: Arc<TokenProvider>,
}

impl InventoryApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            coordinator: Arc::new(InventoryCoordinator::new(app_data)),
        }
    }
}

#[OpenApi]
impl InventoryApi {
    /// List items by name, flagging low stock
    #[oai(path = "/inventory", method = "get", tag = "ApiTags::Inventory")]
    async fn list(
        &self,
        auth: BearerAuth,
        campus: Query<Option<Campus>>,
        category: Query<Option<String>>,
    ) -> Result<Json<Vec<InventoryItemResponse>>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let items = self.coordinator.list(&ctx, campus.0, category.0).await?;
        Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/inventory", method = "post", tag = "ApiTags::Inventory")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<CreateInventoryItemRequest>,
    ) -> Result<CreateInventoryItemResponse, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let item = self.coordinator.create(&ctx, body.0).await?;
        Ok(CreateInventoryItemResponse::Created(Json(item.into())))
    }

    /// Partial update; total value follows quantity and unit cost
    #[oai(path = "/inventory/:id", method = "patch", tag = "ApiTags::Inventory")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateInventoryItemRequest>,
    ) -> Result<Json<InventoryItemResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let item = self.coordinator.update(&ctx, id.0, body.0).await?;
        Ok(Json(item.into()))
    }
}
