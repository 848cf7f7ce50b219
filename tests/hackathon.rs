mod utils;

use utils::prelude::*;

mod create {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn success() {
        let app = App::new().await;
        let admin = app.register_admin().await;

        let res = app
            .post("/v1/hackathon")
            .user(&admin)
            .json(&json!({
                "name": "Spring Hackathon",
                "description": "48 hours of building",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;

        assert!(body["id"].is_string());
        assert_eq!(body["name"], "Spring Hackathon");
        assert_eq!(body["status"], "draft");
        assert_eq!(body["created_by"], admin.id.to_string());
    }

    #[tokio::test]
    #[serial]
    async fn judge_is_not_allowed() {
        let app = App::new().await;
        let judge = app.register_judge().await;

        let res = app
            .post("/v1/hackathon")
            .user(&judge)
            .json(&json!({
                "name": "Judged Hackathon",
            }))
            .send()
            .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }
}

mod get {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn success() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let hackathon_id = app.create_hackathon(&admin).await;

        let res = app
            .get(&format!("/v1/hackathon/{hackathon_id}"))
            .user(&admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["id"], hackathon_id.to_string());
    }

    #[tokio::test]
    #[serial]
    async fn not_found() {
        let app = App::new().await;
        let user = app.register_user().await;

        let res = app
            .get(&format!("/v1/hackathon/{}", uuid::Uuid::new_v4()))
            .user(&user)
            .send()
            .await;

        assert_error!(res, error::HACKATHON_NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn list_contains_created() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let hackathon_id = app.create_hackathon(&admin).await;

        let res = app.get("/v1/hackathon").user(&admin).send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        let list = body.as_array().unwrap();

        assert!(list
            .iter()
            .any(|h| h["id"] == hackathon_id.to_string()));
    }
}

mod update {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn success() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let hackathon_id = app.create_hackathon(&admin).await;

        let res = app
            .patch(&format!("/v1/hackathon/{hackathon_id}"))
            .user(&admin)
            .json(&json!({
                "name": "Renamed Hackathon",
                "status": "active",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .get(&format!("/v1/hackathon/{hackathon_id}"))
            .user(&admin)
            .send()
            .await;

        let body: Value = res.json().await;

        assert_eq!(body["name"], "Renamed Hackathon");
        assert_eq!(body["status"], "active");
    }

    #[tokio::test]
    #[serial]
    async fn clearing_description() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let hackathon_id = app.create_hackathon(&admin).await;

        let res = app
            .patch(&format!("/v1/hackathon/{hackathon_id}"))
            .user(&admin)
            .json(&json!({
                "description": null,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .get(&format!("/v1/hackathon/{hackathon_id}"))
            .user(&admin)
            .send()
            .await;

        let body: Value = res.json().await;
        assert_eq!(body["description"], Value::Null);
    }

    #[tokio::test]
    #[serial]
    async fn empty_update_is_a_no_op() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let hackathon_id = app.create_hackathon(&admin).await;

        let res = app
            .patch(&format!("/v1/hackathon/{hackathon_id}"))
            .user(&admin)
            .json(&json!({}))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    #[serial]
    async fn not_found() {
        let app = App::new().await;
        let admin = app.register_admin().await;

        let res = app
            .patch(&format!("/v1/hackathon/{}", uuid::Uuid::new_v4()))
            .user(&admin)
            .json(&json!({
                "name": "Ghost Hackathon",
            }))
            .send()
            .await;

        assert_error!(res, error::HACKATHON_NOT_FOUND);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn success() {
        let app = App::new().await;
        let admin = app.register_admin().await;
        let hackathon_id = app.create_hackathon(&admin).await;

        let res = app
            .delete(&format!("/v1/hackathon/{hackathon_id}"))
            .user(&admin)
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .get(&format!("/v1/hackathon/{hackathon_id}"))
            .user(&admin)
            .send()
            .await;

        assert_error!(res, error::HACKATHON_NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn not_found() {
        let app = App::new().await;
        let admin = app.register_admin().await;

        let res = app
            .delete(&format!("/v1/hackathon/{}", uuid::Uuid::new_v4()))
            .user(&admin)
            .send()
            .await;

        assert_error!(res, error::HACKATHON_NOT_FOUND);
    }
}
