use super::hackathons;
use chrono::Duration;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_EXERCISES: &str = "PK_exercises";
    pub const FK_EXERCISES_HACKATHON_ID: &str = "FK_exercises_hackathon_id";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub rubric: Option<String>,
    pub kind: Kind,
    pub max_score: f64,
    pub time_limit_minutes: Option<i32>,
    pub start_time: Option<DateTimeUtc>,
    pub status: Status,
    pub created_at: DateTimeUtc,
}

impl Model {
    /// End of the working window, when both a start time and a limit are set.
    pub fn end_time(&self) -> Option<DateTimeUtc> {
        let start = self.start_time?;
        let limit = self.time_limit_minutes?;
        Some(start + Duration::minutes(i64::from(limit)))
    }
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[sea_orm(string_value = "coding")]
    Coding,
    #[sea_orm(string_value = "study")]
    Study,
    #[sea_orm(string_value = "presentation")]
    Presentation,
    #[sea_orm(string_value = "deployment")]
    Deployment,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
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

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_hackathon(hackathon_id: &Uuid) -> Select<Entity> {
        Self::find().filter(Column::HackathonId.eq(*hackathon_id))
    }
}
