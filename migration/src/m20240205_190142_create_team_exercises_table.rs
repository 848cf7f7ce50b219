use entity::{
    exercises, teams,
    team_exercises::{self, constraints::*},
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
                    .table(team_exercises::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(team_exercises::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(team_exercises::Column::TeamId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(team_exercises::Column::ExerciseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(team_exercises::Column::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(team_exercises::Column::AssignedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(team_exercises::Column::StartedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_TEAM_EXERCISES)
                            .col(team_exercises::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_TEAM_EXERCISES_TEAM_ID_EXERCISE_ID)
                            .col(team_exercises::Column::TeamId)
                            .col(team_exercises::Column::ExerciseId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_EXERCISES_TEAM_ID)
                            .from(team_exercises::Entity, team_exercises::Column::TeamId)
                            .to(teams::Entity, teams::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_EXERCISES_EXERCISE_ID)
                            .from(team_exercises::Entity, team_exercises::Column::ExerciseId)
                            .to(exercises::Entity, exercises::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(team_exercises::Entity).to_owned())
            .await
    }
}
