use axum::Json;
use axum::extract::{Path, State};
use rollcall_api::models::*;

use super::{GroupState, parse_group_id};
use crate::errors::{ApiError, GroupError};
use crate::validation::{JsonBody, Validate};

/// Record a participant's availability. Submitting again under the same
/// name replaces the earlier answer; names are the only identity.
#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/responses",
    tag = "response",
    params(
        ("group_id" = String, Path, description = "Group ID")
    ),
    request_body = SubmitResponseRequest,
    responses(
        (status = 200, description = "Response stored", body = SubmitResponseResult),
        (status = 400, description = "Validation failed or invalid group ID"),
        (status = 404, description = "Group not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn submit_response(
    State(state): State<GroupState>,
    Path(group_id): Path<String>,
    JsonBody(body): JsonBody<SubmitResponseRequest>,
) -> Result<Json<SubmitResponseResult>, ApiError> {
    let group_id = parse_group_id(&group_id)?;
    let new_response = body.validate()?;

    if !state.group_repository.exists(group_id).await? {
        return Err(GroupError::GroupNotFound.into());
    }

    let mut tx = state.response_repository.get_pool().begin().await?;

    let response = state
        .response_repository
        .upsert(group_id, &new_response, &mut tx)
        .await?;

    tx.commit().await?;

    tracing::info!(
        group_id = %group_id,
        response_id = %response.id,
        is_available = response.is_available,
        "response stored"
    );

    Ok(Json(SubmitResponseResult {
        success: true,
        response: response.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/responses",
    tag = "response",
    params(
        ("group_id" = String, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Responses, oldest first", body = Vec<ResponseEntry>),
        (status = 400, description = "Invalid group ID"),
        (status = 404, description = "Group not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_group_responses(
    State(state): State<GroupState>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<ResponseEntry>>, ApiError> {
    let group_id = parse_group_id(&group_id)?;

    if !state.group_repository.exists(group_id).await? {
        return Err(GroupError::GroupNotFound.into());
    }

    let responses = state
        .response_repository
        .find_by_group_id(group_id)
        .await?;

    Ok(Json(responses.into_iter().map(Into::into).collect()))
}
