use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Events::Title).string().not_null())
                    .col(ColumnDef::new(Events::Description).text())
                    .col(ColumnDef::new(Events::EventType).string().not_null())
                    .col(ColumnDef::new(Events::StartTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Events::EndTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Events::Location).string())
                    .col(ColumnDef::new(Events::Campus).string().not_null())
                    .col(ColumnDef::new(Events::MaxParticipants).integer())
                    .col(ColumnDef::new(Events::CurrentParticipants).integer().default(0))
                    .col(ColumnDef::new(Events::IsRequired).boolean().default(false))
                    .col(ColumnDef::new(Events::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Events::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Events::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_campus_start_time")
                    .table(Events::Table)
                    .col(Events::Campus)
                    .col(Events::StartTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Title,
    Description,
    EventType,
    StartTime,
    EndTime,
    Location,
    Campus,
    MaxParticipants,
    CurrentParticipants,
    IsRequired,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
