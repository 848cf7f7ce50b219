use super::{submissions, users};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use uuid::Uuid;

pub mod constraints {
    pub const PK_GRADES: &str = "PK_grades";
    pub const UC_GRADES_SUBMISSION_ID_GRADED_BY: &str = "UC_grades_submission_id_graded_by";
    pub const FK_GRADES_SUBMISSION_ID: &str = "FK_grades_submission_id";
    pub const FK_GRADES_GRADED_BY: &str = "FK_grades_graded_by";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub submission_id: Uuid,
    pub graded_by: Uuid,
    pub score: f64,
    pub feedback: Option<String>,
    pub graded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Submission,
    Grader,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Submission => Entity::belongs_to(submissions::Entity)
                .from(Column::SubmissionId)
                .to(submissions::Column::Id)
                .into(),
            Self::Grader => Entity::belongs_to(users::Entity)
                .from(Column::GradedBy)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
