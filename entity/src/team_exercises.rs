use super::{exercises, teams};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_TEAM_EXERCISES: &str = "PK_team_exercises";
    pub const UC_TEAM_EXERCISES_TEAM_ID_EXERCISE_ID: &str = "UC_team_exercises_team_id_exercise_id";
    pub const FK_TEAM_EXERCISES_TEAM_ID: &str = "FK_team_exercises_team_id";
    pub const FK_TEAM_EXERCISES_EXERCISE_ID: &str = "FK_team_exercises_exercise_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "team_exercises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub team_id: Uuid,
    pub exercise_id: Uuid,
    pub status: Status,
    pub assigned_at: DateTimeUtc,
    pub started_at: Option<DateTimeUtc>,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "submitted")]
    Submitted,
    #[sea_orm(string_value = "graded")]
    Graded,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Team,
    Exercise,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::TeamId)
                .to(teams::Column::Id)
                .into(),
            Self::Exercise => Entity::belongs_to(exercises::Entity)
                .from(Column::ExerciseId)
                .to(exercises::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
