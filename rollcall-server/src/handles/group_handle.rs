use axum::Json;
use axum::extract::{Path, State};
use rollcall_api::models::*;

use super::{GroupState, parse_group_id};
use crate::errors::{ApiError, GroupError};
use crate::validation::{JsonBody, Validate};

#[utoipa::path(
    post,
    path = "/api/groups",
    tag = "group",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Group created successfully", body = GroupResponse),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_group(
    State(state): State<GroupState>,
    JsonBody(body): JsonBody<CreateGroupRequest>,
) -> Result<Json<GroupResponse>, ApiError> {
    let new_group = body.validate()?;

    let mut tx = state.group_repository.get_pool().begin().await?;

    let group = state.group_repository.create(&new_group, &mut tx).await?;

    tx.commit().await?;

    tracing::info!(group_id = %group.id, date = %group.date, "group created");

    Ok(Json(group.into()))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}",
    tag = "group",
    params(
        ("group_id" = String, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group with every response, oldest first", body = GroupDetailResponse),
        (status = 400, description = "Invalid group ID"),
        (status = 404, description = "Group not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_group_by_id(
    State(state): State<GroupState>,
    Path(group_id): Path<String>,
) -> Result<Json<GroupDetailResponse>, ApiError> {
    let group_id = parse_group_id(&group_id)?;

    let group = state
        .group_repository
        .find_by_id(group_id)
        .await?
        .ok_or(GroupError::GroupNotFound)?;

    let responses = state
        .response_repository
        .find_by_group_id(group_id)
        .await?;

    Ok(Json(GroupDetailResponse {
        group: group.into(),
        responses: responses.into_iter().map(Into::into).collect(),
    }))
}
