use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_cadets::Cadets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mentorships::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Mentorships::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Mentorships::CadetId).integer().not_null())
                    .col(ColumnDef::new(Mentorships::MentorName).string().not_null())
                    .col(ColumnDef::new(Mentorships::MentorEmail).string())
                    .col(ColumnDef::new(Mentorships::MentorPhone).string())
                    .col(ColumnDef::new(Mentorships::AssignedDate).date().not_null())
                    .col(ColumnDef::new(Mentorships::Status).string().not_null().default("active"))
                    .col(ColumnDef::new(Mentorships::MeetingFrequency).string())
                    .col(ColumnDef::new(Mentorships::LastMeetingDate).date())
                    .col(ColumnDef::new(Mentorships::NextMeetingDate).date())
                    .col(ColumnDef::new(Mentorships::Notes).text())
                    .col(ColumnDef::new(Mentorships::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Mentorships::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentorships_cadet_id")
                            .from(Mentorships::Table, Mentorships::CadetId)
                            .to(Cadets::Table, Cadets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mentorships_cadet_id")
                    .table(Mentorships::Table)
                    .col(Mentorships::CadetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mentorships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Mentorships {
    Table,
    Id,
    CadetId,
    MentorName,
    MentorEmail,
    MentorPhone,
    AssignedDate,
    Status,
    MeetingFrequency,
    LastMeetingDate,
    NextMeetingDate,
    Notes,
    CreatedAt,
    UpdatedAt,
}
