mod group_handle;
mod response_handle;
mod system_handle;

pub use group_handle::*;
pub use response_handle::*;
pub use system_handle::*;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use uuid::Uuid;

use crate::errors::GroupError;
use crate::repositories::{GroupRepository, ResponseRepository};

#[derive(Clone)]
pub struct GroupState {
    pub group_repository: Arc<GroupRepository>,
    pub response_repository: Arc<ResponseRepository>,
}

pub fn group_router(group_state: GroupState) -> Router {
    Router::new()
        .route("/api/groups", post(create_group))
        .route("/api/groups/:group_id", get(get_group_by_id))
        .route(
            "/api/groups/:group_id/responses",
            get(get_group_responses).post(submit_response),
        )
        .with_state(group_state)
}

fn parse_group_id(raw: &str) -> Result<Uuid, GroupError> {
    Uuid::parse_str(raw).map_err(|_| GroupError::InvalidGroupId)
}
