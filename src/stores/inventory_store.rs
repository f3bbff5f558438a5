use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::InternalError;
use crate::types::db::inventory_item;
use crate::types::internal::Campus;

/// Data access for equipment inventory
#[derive(Debug, Default)]
pub struct InventoryStore;

impl InventoryStore {
    pub fn new() -> Self {
        Self
    }

    /// List items alphabetically by name
    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        campus: Option<Campus>,
        category: Option<&str>,
    ) -> Result<Vec<inventory_item::Model>, InternalError> {
        let mut query = inventory_item::Entity::find();
        if let Some(campus) = campus {
            query = query.filter(inventory_item::Column::Campus.eq(campus.as_str()));
        }
        if let Some(category) = category {
            query = query.filter(inventory_item::Column::Category.eq(category));
        }

        query
            .order_by_asc(inventory_item::Column::ItemName)
            .order_by_asc(inventory_item::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_inventory", e))
    }

    pub async fn get(&self, conn: &impl ConnectionTrait, id: i32) -> Result<inventory_item::Model, InternalError> {
        inventory_item::Entity::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_inventory_item", e))?
            .ok_or_else(|| InternalError::not_found("inventory item", id))
    }

    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        model: inventory_item::ActiveModel,
    ) -> Result<inventory_item::Model, InternalError> {
        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_inventory_item", e))
    }

    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        model: inventory_item::ActiveModel,
    ) -> Result<inventory_item::Model, InternalError> {
        model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_inventory_item", e))
    }
}
