use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};
use uuid::Uuid;

use crate::configs::Storage;
use crate::models::{Group, NewGroup};

#[derive(Clone)]
pub struct GroupRepository {
    storage: Arc<Storage>,
}

impl GroupRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl GroupRepository {
    pub async fn create(
        &self,
        item: &NewGroup,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Group, Error> {
        let group: Group = sqlx::query_as(
            r#"
            INSERT INTO groups (id, name, description, date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.date)
        .fetch_one(&mut **transaction)
        .await?;

        Ok(group)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, Error> {
        let group: Option<Group> = sqlx::query_as("SELECT * FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(group)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, Error> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM groups WHERE id = $1)")
            .bind(id)
            .fetch_one(self.storage.get_pool())
            .await?;

        Ok(exists)
    }
}
