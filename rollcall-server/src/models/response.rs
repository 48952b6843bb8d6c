use rollcall_api::models::ResponseEntry;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{SQL_NOW, Table};

/// One participant's availability for a group, unique per `(group_id, user_name)`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Response {
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_name: String,
    pub is_available: bool,
    pub message: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A validated submission ready to be upserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResponse {
    pub user_name: String,
    pub is_available: bool,
    pub message: Option<String>,
}

impl From<Response> for ResponseEntry {
    fn from(response: Response) -> Self {
        Self {
            id: response.id,
            group_id: response.group_id,
            user_name: response.user_name,
            is_available: response.is_available,
            message: response.message,
            created_at: response.created_at,
            updated_at: response.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct ResponseTable;

impl Table for ResponseTable {
    fn name(&self) -> &'static str {
        "responses"
    }

    fn create(&self) -> String {
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS responses (
                id BLOB PRIMARY KEY NOT NULL,
                group_id BLOB NOT NULL,
                user_name VARCHAR(255) NOT NULL,
                is_available BOOLEAN NOT NULL,
                message TEXT,
                created_at TIMESTAMP NOT NULL DEFAULT ({SQL_NOW}),
                updated_at TIMESTAMP NOT NULL DEFAULT ({SQL_NOW}),
                UNIQUE (group_id, user_name),
                FOREIGN KEY (group_id) REFERENCES groups (id) ON DELETE CASCADE
            );
            CREATE INDEX IF NOT EXISTS idx_responses_group_created ON responses (group_id, created_at);
            "#
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS responses;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["groups"]
    }
}
