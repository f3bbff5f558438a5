use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Inventory::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Inventory::ItemName).string().not_null())
                    .col(ColumnDef::new(Inventory::Category).string().not_null())
                    .col(ColumnDef::new(Inventory::Description).text())
                    .col(ColumnDef::new(Inventory::Quantity).integer().not_null().default(0))
                    .col(ColumnDef::new(Inventory::MinQuantity).integer().default(10))
                    .col(ColumnDef::new(Inventory::MaxQuantity).integer().default(100))
                    .col(ColumnDef::new(Inventory::UnitCost).double())
                    .col(ColumnDef::new(Inventory::TotalValue).double())
                    .col(ColumnDef::new(Inventory::Location).string())
                    .col(ColumnDef::new(Inventory::Campus).string().not_null())
                    .col(ColumnDef::new(Inventory::Supplier).string())
                    .col(ColumnDef::new(Inventory::LastRestocked).date())
                    .col(ColumnDef::new(Inventory::Notes).text())
                    .col(ColumnDef::new(Inventory::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Inventory::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_campus_category")
                    .table(Inventory::Table)
                    .col(Inventory::Campus)
                    .col(Inventory::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Inventory {
    Table,
    Id,
    ItemName,
    Category,
    Description,
    Quantity,
    MinQuantity,
    MaxQuantity,
    UnitCost,
    TotalValue,
    Location,
    Campus,
    Supplier,
    LastRestocked,
    Notes,
    CreatedAt,
    UpdatedAt,
}
