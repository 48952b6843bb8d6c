use std::sync::Arc;

use axum::Router;
use axum::http::header::{
    ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE, HeaderName,
};
use axum::http::Method;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::configs::Storage;
use crate::handles::*;
use crate::repositories::{GroupRepository, ResponseRepository};

pub fn create_app(storage: Arc<Storage>) -> Router {
    let group_state = GroupState {
        group_repository: Arc::new(GroupRepository::new(storage.clone())),
        response_repository: Arc::new(ResponseRepository::new(storage.clone())),
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/openapi.json", get(openapi))
        .merge(group_router(group_state))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
}

/// Answers every `OPTIONS` request, preflight or not, before routing.
/// Any origin may call with credentials, so the origin is mirrored rather than `*`.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            ACCEPT,
            AUTHORIZATION,
            CONTENT_LENGTH,
            CONTENT_TYPE,
            DATE,
            HeaderName::from_static("accept-version"),
            HeaderName::from_static("content-md5"),
            HeaderName::from_static("x-api-version"),
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
        ])
}
