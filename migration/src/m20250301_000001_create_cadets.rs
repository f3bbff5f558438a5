use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cadets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cadets::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Cadets::FirstName).string().not_null())
                    .col(ColumnDef::new(Cadets::LastName).string().not_null())
                    .col(ColumnDef::new(Cadets::Email).string())
                    .col(ColumnDef::new(Cadets::Phone).string())
                    .col(ColumnDef::new(Cadets::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Cadets::Address).text())
                    .col(ColumnDef::new(Cadets::City).string())
                    .col(ColumnDef::new(Cadets::State).string())
                    .col(ColumnDef::new(Cadets::ZipCode).string())
                    .col(ColumnDef::new(Cadets::EmergencyContactName).string().not_null())
                    .col(ColumnDef::new(Cadets::EmergencyContactPhone).string().not_null())
                    .col(ColumnDef::new(Cadets::EmergencyContactRelation).string().not_null())
                    .col(ColumnDef::new(Cadets::Campus).string().not_null().default("oahu"))
                    .col(ColumnDef::new(Cadets::ClassNumber).integer())
                    .col(ColumnDef::new(Cadets::StartDate).date())
                    .col(ColumnDef::new(Cadets::GraduationDate).date())
                    .col(ColumnDef::new(Cadets::Status).string().not_null().default("active"))
                    .col(ColumnDef::new(Cadets::AcademicProgress).double().default(0.0))
                    .col(ColumnDef::new(Cadets::FitnessProgress).double().default(0.0))
                    .col(ColumnDef::new(Cadets::LeadershipProgress).double().default(0.0))
                    .col(ColumnDef::new(Cadets::ServiceHours).integer().default(0))
                    .col(ColumnDef::new(Cadets::Notes).text())
                    .col(ColumnDef::new(Cadets::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Cadets::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cadets_campus_status")
                    .table(Cadets::Table)
                    .col(Cadets::Campus)
                    .col(Cadets::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cadets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Cadets {
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
    EmergencyContactName,
    EmergencyContactPhone,
    EmergencyContactRelation,
    Campus,
    ClassNumber,
    StartDate,
    GraduationDate,
    Status,
    AcademicProgress,
    FitnessProgress,
    LeadershipProgress,
    ServiceHours,
    Notes,
    CreatedAt,
    UpdatedAt,
}
