use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Activities::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Activities::ActivityType).string().not_null())
                    .col(ColumnDef::new(Activities::Title).string().not_null())
                    .col(ColumnDef::new(Activities::Description).text())
                    .col(ColumnDef::new(Activities::RelatedId).integer())
                    .col(ColumnDef::new(Activities::RelatedType).string())
                    .col(ColumnDef::new(Activities::PerformedBy).string())
                    .col(ColumnDef::new(Activities::Campus).string())
                    .col(ColumnDef::new(Activities::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Activity feed is read newest-first per campus
        manager
            .create_index(
                Index::create()
                    .name("idx_activities_campus_created_at")
                    .table(Activities::Table)
                    .col(Activities::Campus)
                    .col(Activities::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
    ActivityType,
    Title,
    Description,
    RelatedId,
    RelatedType,
    PerformedBy,
    Campus,
    CreatedAt,
}
