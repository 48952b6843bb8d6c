use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use uuid::Uuid;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseRequest {
    /// Participant name, 1 to 255 characters; identifies the response within the group
    pub user_name: String,
    /// Whether the participant can attend
    pub is_available: bool,
    /// Free-form note
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    /// Response identifier
    pub id: Uuid,
    /// Owning group identifier
    pub group_id: Uuid,
    /// Participant name
    pub user_name: String,
    /// Whether the participant can attend
    pub is_available: bool,
    /// Free-form note
    pub message: Option<String>,
    /// Time of the first submission
    #[serde(with = "crate::format::timestamp")]
    pub created_at: OffsetDateTime,
    /// Time of the latest submission
    #[serde(with = "crate::format::timestamp")]
    pub updated_at: OffsetDateTime,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponseResult {
    /// Always `true` on success
    pub success: bool,
    /// The stored response after insert or update
    pub response: ResponseEntry,
}
