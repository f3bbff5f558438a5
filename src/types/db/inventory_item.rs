use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    pub last_restocked: Option<Date>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl Model {
    /// Derived flag; never stored
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity.unwrap_or(DEFAULT_MIN_QUANTITY)
    }
}

/// Column default for `min_quantity`
pub const DEFAULT_MIN_QUANTITY: i32 = 10;

/// Column default for `max_quantity`
pub const DEFAULT_MAX_QUANTITY: i32 = 100;

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
