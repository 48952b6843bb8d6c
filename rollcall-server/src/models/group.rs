use rollcall_api::models::GroupResponse;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::{SQL_NOW, Table};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub date: Date,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A validated group ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub name: String,
    pub description: Option<String>,
    pub date: Date,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            date: group.date,
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct GroupTable;

impl Table for GroupTable {
    fn name(&self) -> &'static str {
        "groups"
    }

    fn create(&self) -> String {
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS groups (
                id BLOB PRIMARY KEY NOT NULL,
                name VARCHAR(255) NOT NULL,
                description TEXT,
                date DATE NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT ({SQL_NOW}),
                updated_at TIMESTAMP NOT NULL DEFAULT ({SQL_NOW})
            );
            "#
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS groups;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
