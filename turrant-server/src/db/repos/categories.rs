//! Category repository (read-only)

use crate::db::Database;
use crate::models::Category;
use crate::store::Query;

use super::{decode_all, DbError};

const TABLE: &str = "blog_categories";

pub struct CategoryRepo<'a> {
    db: &'a Database,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All categories, alphabetical by name.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let rows = self
            .db
            .client()?
            .select(TABLE, &Query::new().order_asc("name"))
            .await?;
        decode_all("category", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;

    use crate::config::StoreCredentials;
    use crate::store::{MemoryClient, TableClient};

    #[tokio::test]
    async fn lists_alphabetically() {
        let store = Arc::new(MemoryClient::new());
        for name in ["Travel", "Compliance", "HR"] {
            let row = json!({"name": name}).as_object().cloned().unwrap();
            store.insert(TABLE, row).await.unwrap();
        }
        let db = Database::with_client(store);

        let names: Vec<String> = CategoryRepo::new(&db)
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Compliance", "HR", "Travel"]);
    }

    #[tokio::test]
    async fn missing_credentials_is_config_error() {
        let db = Database::new(StoreCredentials::default());
        let err = CategoryRepo::new(&db).list().await.unwrap_err();
        assert!(err.is_config());
    }

    #[tokio::test]
    async fn malformed_row_is_decode_error() {
        let store = Arc::new(MemoryClient::new());
        let row = json!({"id": "1"}).as_object().cloned().unwrap();
        store.insert(TABLE, row).await.unwrap();
        let db = Database::with_client(store);

        let err = CategoryRepo::new(&db).list().await.unwrap_err();
        assert!(matches!(err, DbError::Decode { resource: "category", .. }));
    }
}
