use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};
use uuid::Uuid;

use crate::configs::Storage;
use crate::models::{NewResponse, Response};

#[derive(Clone)]
pub struct ResponseRepository {
    storage: Arc<Storage>,
}

impl ResponseRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl ResponseRepository {
    /// Insert the submission, or overwrite the existing row for the same
    /// `(group_id, user_name)` pair in the same statement.
    ///
    /// On the update path `id` and `created_at` are kept, `is_available` and
    /// `message` are replaced and `updated_at` is refreshed. The unique
    /// constraint decides which path is taken, so concurrent submissions for
    /// one name can never produce two rows.
    ///
    /// The group must exist; a dangling `group_id` fails on the foreign key.
    pub async fn upsert(
        &self,
        group_id: Uuid,
        item: &NewResponse,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Response, Error> {
        let response: Response = sqlx::query_as(
            r#"
            INSERT INTO responses (id, group_id, user_name, is_available, message)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (group_id, user_name) DO UPDATE SET
                is_available = excluded.is_available,
                message = excluded.message,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(group_id)
        .bind(&item.user_name)
        .bind(item.is_available)
        .bind(&item.message)
        .fetch_one(&mut **transaction)
        .await?;

        Ok(response)
    }

    pub async fn find_by_group_id(&self, group_id: Uuid) -> Result<Vec<Response>, Error> {
        let responses: Vec<Response> = sqlx::query_as(
            r#"
            SELECT * FROM responses
            WHERE group_id = $1
            ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .bind(group_id)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(responses)
    }
}
