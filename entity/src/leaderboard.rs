use super::{hackathons, teams};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use uuid::Uuid;

pub mod constraints {
    pub const PK_LEADERBOARD: &str = "PK_leaderboard";
    pub const FK_LEADERBOARD_HACKATHON_ID: &str = "FK_leaderboard_hackathon_id";
    pub const FK_LEADERBOARD_TEAM_ID: &str = "FK_leaderboard_team_id";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "leaderboard")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub hackathon_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_id: Uuid,
    pub total_score: f64,
    pub rank: i32,
    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Hackathon,
    Team,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Hackathon => Entity::belongs_to(hackathons::Entity)
                .from(Column::HackathonId)
                .to(hackathons::Column::Id)
                .into(),
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::TeamId)
                .to(teams::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_hackathon(hackathon_id: &Uuid) -> Select<Entity> {
        Self::find().filter(Column::HackathonId.eq(*hackathon_id))
    }
}
