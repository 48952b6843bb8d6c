use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use rollcall_api::models::CreateGroupRequest;
use rollcall_server::tests::create_test_response;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::mock_app::MockApp;

#[tokio::test]
async fn test_create_group() {
    let app = MockApp::new().await;

    let request = Request::builder()
        .uri("/api/groups")
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::to_string(&CreateGroupRequest {
                name: "Hiking".to_string(),
                description: Some("Trailhead at nine".to_string()),
                date: "2026-01-10".to_string(),
            })
            .unwrap(),
        ))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let group_response: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(group_response["id"].is_string());
    assert_eq!(group_response["name"], json!("Hiking"));
    assert_eq!(group_response["description"], json!("Trailhead at nine"));
    assert_eq!(group_response["date"], json!("2026-01-10"));
    assert!(group_response["created_at"].is_string());
    assert!(group_response["updated_at"].is_string());
}

#[tokio::test]
async fn test_create_group_without_description() {
    let app = MockApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/groups",
            Some(json!({ "name": "Dinner", "date": "2026-03-01" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], json!(null));
}

#[tokio::test]
async fn test_create_group_accepts_datetime() {
    let app = MockApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/groups",
            Some(json!({ "name": "Launch", "date": "2026-05-20T18:30:00.000Z" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], json!("2026-05-20"));
}

#[tokio::test]
async fn test_create_group_rejects_invalid_payload() {
    let app = MockApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/groups",
            Some(json!({ "name": "", "date": "someday" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], json!("Validation failed"));

    let fields: Vec<&str> = body["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|detail| detail["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "date"]);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/groups",
            Some(json!({ "name": "a".repeat(256), "date": "2026-01-10" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .send(Method::POST, "/api/groups", Some(json!({ "name": "No date" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["field"], json!("date"));

    let (status, body) = app
        .send(
            Method::POST,
            "/api/groups",
            Some(json!({ "name": 42, "date": "2026-01-10" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["field"], json!("name"));
}

#[tokio::test]
async fn test_create_group_rejects_malformed_json() {
    let app = MockApp::new().await;

    let request = Request::builder()
        .uri("/api/groups")
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .body(Body::from("{\"name\": \"Hiking\","))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .uri("/api/groups")
        .method(Method::POST)
        .body(Body::from("name=Hiking"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_group_by_id() {
    let app = MockApp::new().await;
    let group = app.create_test_group("ID Test Group").await;

    let request = Request::builder()
        .uri(format!("/api/groups/{}", group.id))
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let detail: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(detail["group"]["id"], json!(group.id.to_string()));
    assert_eq!(detail["group"]["name"], json!("ID Test Group"));
    assert_eq!(detail["group"]["date"], json!("2026-01-10"));
    assert_eq!(detail["responses"], json!([]));
}

#[tokio::test]
async fn test_get_group_includes_responses_in_order() {
    let app = MockApp::new().await;
    let group = app.create_test_group("Ordered").await;

    create_test_response(app.storage.clone(), group.id, "Alice", true, None).await;
    create_test_response(app.storage.clone(), group.id, "Bob", false, Some("away")).await;

    let (status, body) = app
        .send(Method::GET, &format!("/api/groups/{}", group.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let responses = body["responses"].as_array().unwrap();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["user_name"], json!("Alice"));
    assert_eq!(responses[1]["user_name"], json!("Bob"));
    assert_eq!(responses[1]["message"], json!("away"));
    assert_eq!(responses[1]["group_id"], json!(group.id.to_string()));
}

#[tokio::test]
async fn test_get_missing_group() {
    let app = MockApp::new().await;

    let (status, body) = app
        .send(Method::GET, &format!("/api/groups/{}", uuid::Uuid::new_v4()), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], json!("Group not found"));

    let (status, body) = app.send(Method::GET, "/api/groups/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], json!("Invalid group ID"));
}
