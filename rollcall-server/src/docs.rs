use rollcall_api::models::*;
use utoipa::OpenApi;

use crate::handles;

#[derive(OpenApi)]
#[openapi(
    paths(
        handles::create_group,
        handles::get_group_by_id,
        handles::submit_response,
        handles::get_group_responses,
        handles::health,
    ),
    components(schemas(
        CreateGroupRequest,
        GroupResponse,
        GroupDetailResponse,
        SubmitResponseRequest,
        ResponseEntry,
        SubmitResponseResult,
        HealthResponse,
    )),
    tags(
        (name = "group", description = "Event groups"),
        (name = "response", description = "Participant availability"),
        (name = "system", description = "Service status")
    )
)]
pub struct ApiDoc;
