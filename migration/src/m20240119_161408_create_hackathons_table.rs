use entity::{
    hackathons::{self, constraints::*},
    users,
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
                    .table(hackathons::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(hackathons::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(hackathons::Column::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(hackathons::Column::Description).text().null())
                    .col(
                        ColumnDef::new(hackathons::Column::StartTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(hackathons::Column::EndTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(hackathons::Column::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(hackathons::Column::CreatedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(hackathons::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_HACKATHONS)
                            .col(hackathons::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_HACKATHONS_CREATED_BY)
                            .from(hackathons::Entity, hackathons::Column::CreatedBy)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(hackathons::Entity).to_owned())
            .await
    }
}
