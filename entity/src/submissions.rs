use super::{team_exercises, users};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_SUBMISSIONS: &str = "PK_submissions";
    pub const FK_SUBMISSIONS_TEAM_EXERCISE_ID: &str = "FK_submissions_team_exercise_id";
    pub const FK_SUBMISSIONS_SUBMITTED_BY: &str = "FK_submissions_submitted_by";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub team_exercise_id: Uuid,
    pub submitted_by: Uuid,
    pub kind: Kind,
    pub content: Option<String>,
    pub file_path: Option<String>,
    pub submitted_at: DateTimeUtc,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[sea_orm(string_value = "file")]
    File,
    #[sea_orm(string_value = "text")]
    Text,
    #[sea_orm(string_value = "url")]
    Url,
    #[sea_orm(string_value = "github")]
    Github,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    TeamExercise,
    Submitter,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::TeamExercise => Entity::belongs_to(team_exercises::Entity)
                .from(Column::TeamExerciseId)
                .to(team_exercises::Column::Id)
                .into(),
            Self::Submitter => Entity::belongs_to(users::Entity)
                .from(Column::SubmittedBy)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_team_exercise(team_exercise_id: &Uuid) -> Select<Entity> {
        Self::find().filter(Column::TeamExerciseId.eq(*team_exercise_id))
    }
}
