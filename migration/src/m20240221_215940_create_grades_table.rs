use entity::{
    grades::{self, constraints::*},
    submissions, users,
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
                    .table(grades::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(grades::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(grades::Column::SubmissionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(grades::Column::GradedBy).uuid().not_null())
                    .col(ColumnDef::new(grades::Column::Score).double().not_null())
                    .col(ColumnDef::new(grades::Column::Feedback).text().null())
                    .col(
                        ColumnDef::new(grades::Column::GradedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_GRADES).col(grades::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_GRADES_SUBMISSION_ID_GRADED_BY)
                            .col(grades::Column::SubmissionId)
                            .col(grades::Column::GradedBy)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GRADES_SUBMISSION_ID)
                            .from(grades::Entity, grades::Column::SubmissionId)
                            .to(submissions::Entity, submissions::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GRADES_GRADED_BY)
                            .from(grades::Entity, grades::Column::GradedBy)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(grades::Entity).to_owned())
            .await
    }
}
