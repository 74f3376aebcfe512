use crate::shell::http::router;
use crate::tests::fixtures::matches::{body_json, empty_request, json_request, make_test_state};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn tracks_a_match_through_its_lifecycle() {
    let app = router(make_test_state());

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/matches",
            r#"{"homeTeam":"Ajax","awayTeam":"PSV","matchDate":"2024-05-12"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = body_json(created).await["id"].as_u64().unwrap();

    for segment in ["goals", "goals", "yellowcards", "redcards", "extratime"] {
        let response = app
            .clone()
            .oneshot(empty_request("PATCH", &format!("/matches/{id}/{segment}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let fetched = app
        .clone()
        .oneshot(empty_request("GET", &format!("/matches/{id}")))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(
        body_json(fetched).await,
        json!({
            "id": id,
            "homeTeam": "Ajax",
            "awayTeam": "PSV",
            "matchDate": "2024-05-12",
            "homeGoals": 2,
            "awayGoals": 0,
            "yellowCards": 1,
            "redCards": 1,
            "extraTime": true
        })
    );

    let deleted = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/matches/{id}")))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = app
        .clone()
        .oneshot(empty_request("GET", &format!("/matches/{id}")))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let recreated = app
        .oneshot(json_request("POST", "/matches", "{}"))
        .await
        .unwrap();
    assert_eq!(body_json(recreated).await["id"], json!(id + 1));
}

#[tokio::test]
async fn serves_the_same_routes_under_the_api_prefix() {
    let state = make_test_state();
    let app = router(state.clone());

    let created = app
        .clone()
        .oneshot(json_request("POST", "/api/matches", r#"{"homeTeam":"AZ"}"#))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let listed = app
        .oneshot(empty_request("GET", "/matches"))
        .await
        .unwrap();
    assert_eq!(body_json(listed).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn rejects_unsupported_methods() {
    let response = router(make_test_state())
        .oneshot(empty_request("PATCH", "/matches/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn answers_cors_preflight_with_credentials_for_any_origin() {
    let response = router(make_test_state())
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/matches/1/goals")
                .header("origin", "https://scores.example")
                .header("access-control-request-method", "PATCH")
                .header("access-control-request-headers", "x-requested-with")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "https://scores.example"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert!(
        headers["access-control-allow-methods"]
            .to_str()
            .unwrap()
            .contains("PATCH")
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "x-requested-with"
    );
}
