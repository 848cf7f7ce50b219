use crate::error::Result;
use chrono::Utc;
use entity::{exercises, grades, leaderboard, submissions, team_exercises, teams};
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Team total over graded submissions: per-submission average across its
/// grade rows, summed. Submissions without grades never reach this function.
pub fn team_total(scores: &[(Uuid, f64)]) -> f64 {
    let mut per_submission: HashMap<Uuid, (f64, u32)> = HashMap::new();

    for (submission_id, score) in scores {
        let entry = per_submission.entry(*submission_id).or_insert((0.0, 0));
        entry.0 += score;
        entry.1 += 1;
    }

    per_submission
        .values()
        .map(|(sum, count)| sum / f64::from(*count))
        .sum()
}

/// Ranks are sequential 1-based positions after a stable descending sort, so
/// equal totals keep their input order and still get distinct ranks.
pub fn assign_ranks(mut totals: Vec<(Uuid, f64)>) -> Vec<(Uuid, f64, i32)> {
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    totals
        .into_iter()
        .enumerate()
        .map(|(position, (team_id, total))| (team_id, total, position as i32 + 1))
        .collect()
}

async fn graded_scores<C>(db: &C, team_id: &Uuid) -> Result<Vec<(Uuid, f64)>>
where
    C: ConnectionTrait,
{
    let scores = grades::Entity::find()
        .select_only()
        .column(grades::Column::SubmissionId)
        .column(grades::Column::Score)
        .join(JoinType::InnerJoin, grades::Relation::Submission.def())
        .join(JoinType::InnerJoin, submissions::Relation::TeamExercise.def())
        .filter(team_exercises::Column::TeamId.eq(*team_id))
        .into_tuple()
        .all(db)
        .await?;

    Ok(scores)
}

/// Full recompute and upsert of the hackathon's leaderboard, returning the
/// fresh rows ordered by rank. Upserts run as independent statements; the
/// computation is idempotent and always overwrites every row of the
/// hackathon.
pub async fn recompute_leaderboard<C>(
    db: &C,
    hackathon_id: &Uuid,
) -> Result<Vec<leaderboard::Model>>
where
    C: ConnectionTrait,
{
    let teams = teams::Entity::find_by_hackathon(hackathon_id)
        .order_by_asc(teams::Column::Id)
        .all(db)
        .await?;

    let mut totals = Vec::with_capacity(teams.len());
    for team in &teams {
        let scores = graded_scores(db, &team.id).await?;
        totals.push((team.id, team_total(&scores)));
    }

    let now = Utc::now();

    for (team_id, total_score, rank) in assign_ranks(totals) {
        let entry = leaderboard::ActiveModel {
            hackathon_id: Set(*hackathon_id),
            team_id: Set(team_id),
            total_score: Set(total_score),
            rank: Set(rank),
            last_updated: Set(now),
        };

        leaderboard::Entity::insert(entry)
            .on_conflict(
                OnConflict::columns([
                    leaderboard::Column::HackathonId,
                    leaderboard::Column::TeamId,
                ])
                .update_columns([
                    leaderboard::Column::TotalScore,
                    leaderboard::Column::Rank,
                    leaderboard::Column::LastUpdated,
                ])
                .to_owned(),
            )
            .exec(db)
            .await?;
    }

    let rows = leaderboard::Entity::find_by_hackathon(hackathon_id)
        .order_by_asc(leaderboard::Column::Rank)
        .all(db)
        .await?;

    Ok(rows)
}

#[derive(Debug, Serialize)]
pub struct ExerciseScore {
    pub exercise_id: Uuid,
    pub title: String,
    pub max_score: f64,
    pub score: f64,
}

/// Per-exercise breakdown for one team: flat average over every grade row
/// tied to the (team, exercise) pair, 0 when nothing is graded yet.
pub async fn exercise_breakdown<C>(
    db: &C,
    hackathon_id: &Uuid,
    team_id: &Uuid,
) -> Result<Vec<ExerciseScore>>
where
    C: ConnectionTrait,
{
    let exercises = exercises::Entity::find_by_hackathon(hackathon_id)
        .order_by_asc(exercises::Column::CreatedAt)
        .all(db)
        .await?;

    let mut breakdown = Vec::with_capacity(exercises.len());

    for exercise in exercises {
        let scores: Vec<f64> = grades::Entity::find()
            .select_only()
            .column(grades::Column::Score)
            .join(JoinType::InnerJoin, grades::Relation::Submission.def())
            .join(JoinType::InnerJoin, submissions::Relation::TeamExercise.def())
            .filter(team_exercises::Column::TeamId.eq(*team_id))
            .filter(team_exercises::Column::ExerciseId.eq(exercise.id))
            .into_tuple()
            .all(db)
            .await?;

        let score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        breakdown.push(ExerciseScore {
            exercise_id: exercise.id,
            title: exercise.title,
            max_score: exercise.max_score,
            score,
        });
    }

    Ok(breakdown)
}
