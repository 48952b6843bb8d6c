use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use uuid::Uuid;
use super::response::ResponseEntry;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    /// Group name, 1 to 255 characters
    pub name: String,
    /// Group description
    #[serde(default)]
    pub description: Option<String>,
    /// Event date, `YYYY-MM-DD` or an RFC 3339 date-time
    pub date: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResponse {
    /// Group identifier
    pub id: Uuid,
    /// Group name
    pub name: String,
    /// Group description
    pub description: Option<String>,
    /// Event date
    #[cfg_attr(feature = "docs", schema(value_type = String, format = Date, example = "2026-01-10"))]
    #[serde(with = "crate::format::calendar_date")]
    pub date: Date,
    /// Creation time
    #[serde(with = "crate::format::timestamp")]
    pub created_at: OffsetDateTime,
    /// Last modification time
    #[serde(with = "crate::format::timestamp")]
    pub updated_at: OffsetDateTime,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetailResponse {
    /// The group itself
    pub group: GroupResponse,
    /// Every response, oldest first
    pub responses: Vec<ResponseEntry>,
}
