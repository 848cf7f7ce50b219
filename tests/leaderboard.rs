mod utils;

use utils::prelude::*;
use uuid::Uuid;

mod aggregation {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn averages_per_submission_then_sums() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let judge = app.register_judge().await;
        let judge2 = app.register_judge().await;
        let owner = app.register_user().await;

        let hackathon_id = app.create_hackathon(&admin).await;
        let team_id = app.create_team(&hackathon_id, &owner).await;

        let first = app.create_exercise(&admin, &hackathon_id, 100.0).await;
        let second = app.create_exercise(&admin, &hackathon_id, 100.0).await;

        let te1 = app.assign_exercise(&admin, &first, &team_id).await;
        let te2 = app.assign_exercise(&admin, &second, &team_id).await;

        let sub1 = app.submit_text(&owner, &te1, "first answer").await;
        let sub2 = app.submit_text(&owner, &te2, "second answer").await;

        app.create_grade(&judge, &sub1, 80.0).await;
        app.create_grade(&judge, &sub2, 60.0).await;
        app.create_grade(&judge2, &sub2, 40.0).await;

        let res = app
            .get(&format!("/v1/leaderboard?hackathon_id={hackathon_id}"))
            .user(&owner)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;

        assert_eq!(body[0]["team_id"], team_id.to_string());
        assert_eq!(body[0]["total_score"], 130.0);
        assert_eq!(body[0]["rank"], 1);
    }

    #[tokio::test]
    #[serial]
    async fn ungraded_submissions_are_excluded() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let judge = app.register_judge().await;
        let owner = app.register_user().await;

        let hackathon_id = app.create_hackathon(&admin).await;
        let team_id = app.create_team(&hackathon_id, &owner).await;

        let first = app.create_exercise(&admin, &hackathon_id, 100.0).await;
        let second = app.create_exercise(&admin, &hackathon_id, 100.0).await;

        let te1 = app.assign_exercise(&admin, &first, &team_id).await;
        let te2 = app.assign_exercise(&admin, &second, &team_id).await;

        let sub1 = app.submit_text(&owner, &te1, "graded").await;
        app.submit_text(&owner, &te2, "still waiting").await;

        app.create_grade(&judge, &sub1, 50.0).await;

        let res = app
            .get(&format!("/v1/leaderboard?hackathon_id={hackathon_id}"))
            .user(&owner)
            .send()
            .await;

        let body: Value = res.json().await;

        assert_eq!(body[0]["total_score"], 50.0);
    }

    #[tokio::test]
    #[serial]
    async fn ties_get_distinct_sequential_ranks() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let judge = app.register_judge().await;

        let hackathon_id = app.create_hackathon(&admin).await;
        let exercise_id = app.create_exercise(&admin, &hackathon_id, 100.0).await;

        let mut submissions = Vec::new();
        for _ in 0..3 {
            let owner = app.register_user().await;
            let team_id = app.create_team(&hackathon_id, &owner).await;
            let te = app.assign_exercise(&admin, &exercise_id, &team_id).await;
            submissions.push(app.submit_text(&owner, &te, "entry").await);
        }

        app.create_grade(&judge, &submissions[0], 100.0).await;
        app.create_grade(&judge, &submissions[1], 100.0).await;
        app.create_grade(&judge, &submissions[2], 50.0).await;

        let res = app
            .get(&format!("/v1/leaderboard?hackathon_id={hackathon_id}"))
            .user(&judge)
            .send()
            .await;

        let body: Value = res.json().await;
        let entries = body.as_array().unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["total_score"], 100.0);
        assert_eq!(entries[1]["total_score"], 100.0);
        assert_eq!(entries[2]["total_score"], 50.0);
        assert_eq!(entries[0]["rank"], 1);
        assert_eq!(entries[1]["rank"], 2);
        assert_eq!(entries[2]["rank"], 3);
    }

    #[tokio::test]
    #[serial]
    async fn teams_without_grades_score_zero() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let owner = app.register_user().await;

        let hackathon_id = app.create_hackathon(&admin).await;
        let team_id = app.create_team(&hackathon_id, &owner).await;

        let res = app
            .get(&format!("/v1/leaderboard?hackathon_id={hackathon_id}"))
            .user(&owner)
            .send()
            .await;

        let body: Value = res.json().await;

        assert_eq!(body[0]["team_id"], team_id.to_string());
        assert_eq!(body[0]["total_score"], 0.0);
        assert_eq!(body[0]["rank"], 1);
    }

    #[tokio::test]
    #[serial]
    async fn repeated_reads_are_stable() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let judge = app.register_judge().await;
        let owner = app.register_user().await;

        let hackathon_id = app.create_hackathon(&admin).await;
        let team_id = app.create_team(&hackathon_id, &owner).await;
        let exercise_id = app.create_exercise(&admin, &hackathon_id, 100.0).await;
        let te = app.assign_exercise(&admin, &exercise_id, &team_id).await;
        let submission_id = app.submit_text(&owner, &te, "entry").await;

        app.create_grade(&judge, &submission_id, 75.0).await;

        let url = format!("/v1/leaderboard?hackathon_id={hackathon_id}");

        let first: Value = app.get(&url).user(&owner).send().await.json().await;
        let second: Value = app.get(&url).user(&owner).send().await.json().await;

        assert_eq!(first[0]["total_score"], second[0]["total_score"]);
        assert_eq!(first[0]["rank"], second[0]["rank"]);
    }
}

mod views {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn podium_is_capped_at_three() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let hackathon_id = app.create_hackathon(&admin).await;

        for _ in 0..5 {
            let owner = app.register_user().await;
            app.create_team(&hackathon_id, &owner).await;
        }

        let res = app
            .get(&format!(
                "/v1/leaderboard?hackathon_id={hackathon_id}&podium=true"
            ))
            .user(&admin)
            .send()
            .await;

        let body: Value = res.json().await;

        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    #[serial]
    async fn detailed_view_breaks_scores_down_by_exercise() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let judge = app.register_judge().await;
        let owner = app.register_user().await;

        let hackathon_id = app.create_hackathon(&admin).await;
        let team_id = app.create_team(&hackathon_id, &owner).await;
        let exercise_id = app.create_exercise(&admin, &hackathon_id, 100.0).await;
        let te = app.assign_exercise(&admin, &exercise_id, &team_id).await;
        let submission_id = app.submit_text(&owner, &te, "entry").await;

        app.create_grade(&judge, &submission_id, 90.0).await;

        let res = app
            .get(&format!(
                "/v1/leaderboard?hackathon_id={hackathon_id}&detailed=true"
            ))
            .user(&owner)
            .send()
            .await;

        let body: Value = res.json().await;
        let exercises = body[0]["exercises"].as_array().unwrap();

        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0]["exercise_id"], exercise_id.to_string());
        assert_eq!(exercises[0]["score"], 90.0);
        assert_eq!(exercises[0]["max_score"], 100.0);
    }

    #[tokio::test]
    #[serial]
    async fn hackathon_not_found() {
        let app = App::new().await;
        let user = app.register_user().await;

        let res = app
            .get(&format!("/v1/leaderboard?hackathon_id={}", Uuid::new_v4()))
            .user(&user)
            .send()
            .await;

        assert_error!(res, error::HACKATHON_NOT_FOUND);
    }
}

mod refresh {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn returns_the_fresh_standings() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let owner = app.register_user().await;

        let hackathon_id = app.create_hackathon(&admin).await;
        let team_id = app.create_team(&hackathon_id, &owner).await;

        let res = app
            .post("/v1/leaderboard/refresh")
            .user(&owner)
            .json(&json!({
                "hackathon_id": hackathon_id,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;

        assert_eq!(body[0]["team_id"], team_id.to_string());
    }
}

mod team_rank {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn includes_rank_and_breakdown() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let judge = app.register_judge().await;
        let owner = app.register_user().await;

        let hackathon_id = app.create_hackathon(&admin).await;
        let team_id = app.create_team(&hackathon_id, &owner).await;
        let exercise_id = app.create_exercise(&admin, &hackathon_id, 100.0).await;
        let te = app.assign_exercise(&admin, &exercise_id, &team_id).await;
        let submission_id = app.submit_text(&owner, &te, "entry").await;

        app.create_grade(&judge, &submission_id, 65.0).await;

        let res = app
            .get(&format!("/v1/leaderboard/team/{team_id}"))
            .user(&owner)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;

        assert_eq!(body["team_id"], team_id.to_string());
        assert_eq!(body["total_score"], 65.0);
        assert_eq!(body["rank"], 1);
        assert!(body["exercises"].is_array());
    }

    #[tokio::test]
    #[serial]
    async fn team_not_found() {
        let app = App::new().await;
        let user = app.register_user().await;

        let res = app
            .get(&format!("/v1/leaderboard/team/{}", Uuid::new_v4()))
            .user(&user)
            .send()
            .await;

        assert_error!(res, error::TEAM_NOT_FOUND);
    }
}
