use entity::{
    hackathons,
    leaderboard::{self, constraints::*},
    teams,
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
                    .table(leaderboard::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(leaderboard::Column::HackathonId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(leaderboard::Column::TeamId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(leaderboard::Column::TotalScore)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(leaderboard::Column::Rank).integer().not_null())
                    .col(
                        ColumnDef::new(leaderboard::Column::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_LEADERBOARD)
                            .col(leaderboard::Column::HackathonId)
                            .col(leaderboard::Column::TeamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEADERBOARD_HACKATHON_ID)
                            .from(leaderboard::Entity, leaderboard::Column::HackathonId)
                            .to(hackathons::Entity, hackathons::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEADERBOARD_TEAM_ID)
                            .from(leaderboard::Entity, leaderboard::Column::TeamId)
                            .to(teams::Entity, teams::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(leaderboard::Entity).to_owned())
            .await
    }
}
