use entity::{
    submissions::{self, constraints::*},
    team_exercises, users,
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
                    .table(submissions::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(submissions::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(submissions::Column::TeamExerciseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::SubmittedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::Kind)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(submissions::Column::Content).text().null())
                    .col(
                        ColumnDef::new(submissions::Column::FilePath)
                            .string_len(512)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_SUBMISSIONS)
                            .col(submissions::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_TEAM_EXERCISE_ID)
                            .from(submissions::Entity, submissions::Column::TeamExerciseId)
                            .to(team_exercises::Entity, team_exercises::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_SUBMITTED_BY)
                            .from(submissions::Entity, submissions::Column::SubmittedBy)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(submissions::Entity).to_owned())
            .await
    }
}
