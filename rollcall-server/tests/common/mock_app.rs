#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use rollcall_server::app::create_app;
use rollcall_server::configs::Storage;
use rollcall_server::models::Group;
use rollcall_server::tests::{create_test_group, setup_test_db};
use serde_json::Value;
use tower::ServiceExt;

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = setup_test_db().await;
        let router = create_app(storage.clone());

        Self { storage, router }
    }

    pub async fn create_test_group(&self, name: &str) -> Group {
        create_test_group(self.storage.clone(), name).await
    }

    /// Send a request and decode the body as JSON (`Null` when empty).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().uri(uri).method(method);

        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        if body.is_empty() {
            (status, Value::Null)
        } else {
            (status, serde_json::from_slice(&body).unwrap())
        }
    }

    pub async fn count_responses(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM responses")
            .fetch_one(self.storage.get_pool())
            .await
            .unwrap()
    }
}
