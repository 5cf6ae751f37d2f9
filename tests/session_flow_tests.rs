use std::collections::HashSet;

use axum::http::StatusCode;

mod common;

// Colors (category 4) at difficulty 1 seeds exactly two words.
const POOL_URI: &str = "/api/words/random?categoryId=4&difficulty=1";

#[tokio::test]
async fn draws_exhaust_the_pool_without_repeats() {
    let app = common::create_test_app();
    let session = common::session_token();

    let mut seen = HashSet::new();
    for _ in 0..2 {
        let (status, body) = common::get_with_session(&app, POOL_URI, &session).await;
        assert_eq!(status, StatusCode::OK);
        let id = body["data"]["word"]["id"].as_i64().unwrap();
        assert!(seen.insert(id), "word {id} repeated");
        assert_eq!(body["data"]["word"]["categoryId"], 4);
        assert_eq!(body["data"]["word"]["difficulty"], 1);
    }

    let (status, body) = common::get_with_session(&app, POOL_URI, &session).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "NO_WORDS_AVAILABLE");
}

#[tokio::test]
async fn reset_makes_the_pool_drawable_again() {
    let app = common::create_test_app();
    let session = common::session_token();

    for _ in 0..2 {
        let (status, _) = common::get_with_session(&app, POOL_URI, &session).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = common::post_with_session(&app, "/api/sessions/reset", &session).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], session.as_str());
    assert_eq!(body["data"]["usedWordIds"].as_array().unwrap().len(), 0);

    let (status, _) = common::get_with_session(&app, POOL_URI, &session).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn reset_preserves_created_at() {
    let app = common::create_test_app();
    let session = common::session_token();

    let (_, first) = common::post_with_session(&app, "/api/sessions/reset", &session).await;
    let created_at = first["data"]["createdAt"].as_str().unwrap().to_string();

    common::get_with_session(&app, POOL_URI, &session).await;

    let (_, second) = common::post_with_session(&app, "/api/sessions/reset", &session).await;
    assert_eq!(second["data"]["createdAt"], created_at.as_str());
    assert!(second["data"]["lastAccessedAt"].as_str().unwrap() >= created_at.as_str());
}

#[tokio::test]
async fn sessions_do_not_share_progress() {
    let app = common::create_test_app();
    let first = common::session_token();
    let second = common::session_token();

    for _ in 0..2 {
        common::get_with_session(&app, POOL_URI, &first).await;
    }
    let (status, _) = common::get_with_session(&app, POOL_URI, &first).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::get_with_session(&app, POOL_URI, &second).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_session_header_is_a_validation_error() {
    let app = common::create_test_app();

    let (status, body) = common::get(&app, "/api/words/random").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = common::send(
        &app,
        axum::http::Request::builder()
            .method("POST")
            .uri("/api/sessions/reset")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
