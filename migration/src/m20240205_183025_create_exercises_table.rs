use entity::{
    exercises::{self, constraints::*},
    hackathons,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(exercises::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(exercises::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(exercises::Column::HackathonId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(exercises::Column::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(exercises::Column::Description).text().null())
                    .col(
                        ColumnDef::new(exercises::Column::Instructions)
                            .text()
                            .null(),
                    )
                    .col(ColumnDef::new(exercises::Column::Rubric).text().null())
                    .col(
                        ColumnDef::new(exercises::Column::Kind)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(exercises::Column::MaxScore)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(exercises::Column::TimeLimitMinutes)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(exercises::Column::StartTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(exercises::Column::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(exercises::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_EXERCISES)
                            .col(exercises::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EXERCISES_HACKATHON_ID)
                            .from(exercises::Entity, exercises::Column::HackathonId)
                            .to(hackathons::Entity, hackathons::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(exercises::Entity).to_owned())
            .await
    }
}
