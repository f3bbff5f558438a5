use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Applications::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Applications::FirstName).string().not_null())
                    .col(ColumnDef::new(Applications::LastName).string().not_null())
                    .col(ColumnDef::new(Applications::Email).string().not_null())
                    .col(ColumnDef::new(Applications::Phone).string().not_null())
                    .col(ColumnDef::new(Applications::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Applications::Address).text().not_null())
                    .col(ColumnDef::new(Applications::City).string().not_null())
                    .col(ColumnDef::new(Applications::State).string().not_null())
                    .col(ColumnDef::new(Applications::ZipCode).string().not_null())
                    .col(ColumnDef::new(Applications::ParentGuardianName).string().not_null())
                    .col(ColumnDef::new(Applications::ParentGuardianPhone).string().not_null())
                    .col(ColumnDef::new(Applications::ParentGuardianEmail).string())
                    .col(ColumnDef::new(Applications::CurrentSchool).string())
                    .col(ColumnDef::new(Applications::GradeLevel).string())
                    .col(ColumnDef::new(Applications::ReasonForApplying).text())
                    .col(ColumnDef::new(Applications::PreviousChallenges).text())
                    .col(ColumnDef::new(Applications::Goals).text())
                    .col(ColumnDef::new(Applications::PreferredCampus).string().not_null().default("oahu"))
                    .col(ColumnDef::new(Applications::Status).string().not_null().default("pending"))
                    .col(ColumnDef::new(Applications::ReviewedBy).string())
                    .col(ColumnDef::new(Applications::ReviewNotes).text())
                    .col(ColumnDef::new(Applications::SubmittedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Applications::ReviewedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Applications::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Applications::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_applications_campus_status")
                    .table(Applications::Table)
                    .col(Applications::PreferredCampus)
                    .col(Applications::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Address,
    City,
    State,
    ZipCode,
    ParentGuardianName,
    ParentGuardianPhone,
    ParentGuardianEmail,
    CurrentSchool,
    GradeLevel,
    ReasonForApplying,
    PreviousChallenges,
    Goals,
    PreferredCampus,
    Status,
    ReviewedBy,
    ReviewNotes,
    SubmittedAt,
    ReviewedAt,
    CreatedAt,
    UpdatedAt,
}
