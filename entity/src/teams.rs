use super::{hackathons, team_members, users};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use uuid::Uuid;

pub mod constraints {
    pub const PK_TEAMS: &str = "PK_teams";
    pub const UC_TEAMS_HACKATHON_ID_NAME: &str = "UC_teams_hackathon_id_name";
    pub const FK_TEAMS_HACKATHON_ID: &str = "FK_teams_hackathon_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Hackathon,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Hackathon => Entity::belongs_to(hackathons::Entity)
                .from(Column::HackathonId)
                .to(hackathons::Column::Id)
                .into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        team_members::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(team_members::Relation::Team.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_hackathon(hackathon_id: &Uuid) -> Select<Entity> {
        Self::find().filter(Column::HackathonId.eq(*hackathon_id))
    }
}
