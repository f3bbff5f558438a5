use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{payload::Json, ApiResponse, Object};
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};

use crate::errors::internal::{ValidationError, Violations};
use crate::types::db::inventory_item::{self, DEFAULT_MAX_QUANTITY, DEFAULT_MIN_QUANTITY};
use crate::types::internal::Campus;

/// `quantity * unit_cost`, unknown while the unit cost is
pub fn total_value(quantity: i32, unit_cost: Option<f64>) -> Option<f64> {
    unit_cost.map(|cost| quantity as f64 * cost)
}

fn check_costs(v: &mut Violations, unit_cost: Option<f64>) {
    v.check(unit_cost.map_or(true, |c| c >= 0.0), "unit_cost", "must not be negative");
}

#[derive(Object, Debug, Clone)]
pub struct CreateInventoryItemRequest {
    pub item_name: String,
    pub category: String,
    pub description: Option<String>,
    /// Defaults to 0
    pub quantity: Option<i32>,
    /// Low-stock threshold, defaults to 10
    pub min_quantity: Option<i32>,
    /// Defaults to 100
    pub max_quantity: Option<i32>,
    pub unit_cost: Option<f64>,
    pub location: Option<String>,
    /// Defaults to oahu
    pub campus: Option<Campus>,
    pub supplier: Option<String>,
    pub last_restocked: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl CreateInventoryItemRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Violations::new();
        v.not_blank(&self.item_name, "item_name")
            .not_blank(&self.category, "category")
            .non_negative(self.quantity, "quantity")
            .non_negative(self.min_quantity, "min_quantity")
            .non_negative(self.max_quantity, "max_quantity");
        check_costs(&mut v, self.unit_cost);
        v.into_result()
    }

    pub fn into_active_model(self, now: DateTime<Utc>) -> inventory_item::ActiveModel {
        let quantity = self.quantity.unwrap_or(0);

        inventory_item::ActiveModel {
            id: NotSet,
            item_name: Set(self.item_name),
            category: Set(self.category),
            description: Set(self.description),
            quantity: Set(quantity),
            min_quantity: Set(Some(self.min_quantity.unwrap_or(DEFAULT_MIN_QUANTITY))),
            max_quantity: Set(Some(self.max_quantity.unwrap_or(DEFAULT_MAX_QUANTITY))),
            unit_cost: Set(self.unit_cost),
            total_value: Set(total_value(quantity, self.unit_cost)),
            location: Set(self.location),
            campus: Set(self.campus.unwrap_or_default().as_str().to_string()),
            supplier: Set(self.supplier),
            last_restocked: Set(self.last_restocked),
            notes: Set(self.notes),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

/// Partial update; total value is recomputed from the resulting quantity and unit cost
#[derive(Object, Debug, Clone, Default)]
pub struct UpdateInventoryItemRequest {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub min_quantity: Option<i32>,
    pub max_quantity: Option<i32>,
    pub unit_cost: Option<f64>,
    pub location: Option<String>,
    pub campus: Option<Campus>,
    pub supplier: Option<String>,
    pub last_restocked: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl UpdateInventoryItemRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Violations::new();
        if let Some(name) = &self.item_name {
            v.not_blank(name, "item_name");
        }
        if let Some(category) = &self.category {
            v.not_blank(category, "category");
        }
        v.non_negative(self.quantity, "quantity")
            .non_negative(self.min_quantity, "min_quantity")
            .non_negative(self.max_quantity, "max_quantity");
        check_costs(&mut v, self.unit_cost);
        v.into_result()
    }

    pub fn apply(self, current: inventory_item::Model, now: DateTime<Utc>) -> inventory_item::ActiveModel {
        let quantity = self.quantity.unwrap_or(current.quantity);
        let unit_cost = self.unit_cost.or(current.unit_cost);
        let recompute = self.quantity.is_some() || self.unit_cost.is_some();

        let mut model = current.into_active_model();

        if let Some(value) = self.item_name {
            model.item_name = Set(value);
        }
        if let Some(value) = self.category {
            model.category = Set(value);
        }
        if let Some(value) = self.description {
            model.description = Set(Some(value));
        }
        if let Some(value) = self.quantity {
            model.quantity = Set(value);
        }
        if let Some(value) = self.min_quantity {
            model.min_quantity = Set(Some(value));
        }
        if let Some(value) = self.max_quantity {
            model.max_quantity = Set(Some(value));
        }
        if let Some(value) = self.unit_cost {
            model.unit_cost = Set(Some(value));
        }
        if let Some(value) = self.location {
            model.location = Set(Some(value));
        }
        if let Some(value) = self.campus {
            model.campus = Set(value.as_str().to_string());
        }
        if let Some(value) = self.supplier {
            model.supplier = Set(Some(value));
        }
        if let Some(value) = self.last_restocked {
            model.last_restocked = Set(Some(value));
        }
        if let Some(value) = self.notes {
            model.notes = Set(Some(value));
        }

        if recompute && unit_cost.is_some() {
            model.total_value = Set(total_value(quantity, unit_cost));
        }

        model.updated_at = Set(now);
        model
    }
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct InventoryItemResponse {
    pub id: i32,
    pub item_name: String,
    pub category: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub min_quantity: Option<i32>,
    pub max_quantity: Option<i32>,
    pub unit_cost: Option<f64>,
    pub total_value: Option<f64>,
    pub location: Option<String>,
    pub campus: String,
    pub supplier: Option<String>,
    pub last_restocked: Option<NaiveDate>,
    pub notes: Option<String>,
    /// quantity <= min_quantity
    pub low_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<inventory_item::Model> for InventoryItemResponse {
    fn from(m: inventory_item::Model) -> Self {
        Self {
            low_stock: m.is_low_stock(),
            id: m.id,
            item_name: m.item_name,
            category: m.category,
            description: m.description,
            quantity: m.quantity,
            min_quantity: m.min_quantity,
            max_quantity: m.max_quantity,
            unit_cost: m.unit_cost,
            total_value: m.total_value,
            location: m.location,
            campus: m.campus,
            supplier: m.supplier,
            last_restocked: m.last_restocked,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum CreateInventoryItemResponse {
    /// Item added
    #[oai(status = 201)]
    Created(Json<InventoryItemResponse>),
}
