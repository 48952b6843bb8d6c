mod group;
mod response;

pub use group::*;
pub use response::*;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests
    pub status: String,
    /// Server time of the check
    #[serde(with = "crate::format::timestamp")]
    pub timestamp: OffsetDateTime,
}
