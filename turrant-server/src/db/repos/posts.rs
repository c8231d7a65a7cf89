//! Post repository
//!
//! Reads for anonymous readers always filter on `published = true`;
//! admin reads see drafts too.

use crate::db::Database;
use crate::models::{NewPost, Post, PostPatch};
use crate::store::{Filter, Query, StoreError};

use super::{decode, decode_all, DbError};

const TABLE: &str = "blog_posts";
const RESOURCE: &str = "post";

/// Post repository
pub struct PostRepo<'a> {
    db: &'a Database,
}

impl<'a> PostRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Published posts, newest `published_at` first.
    pub async fn list_published(&self) -> Result<Vec<Post>, DbError> {
        let query = Query::new()
            .eq("published", true)
            .order_desc("published_at");
        let rows = self.db.client()?.select(TABLE, &query).await?;
        decode_all(RESOURCE, rows)
    }

    /// A single published post by slug.
    ///
    /// Returns `None` when no published post has this slug. More than one
    /// match means the store lost slug uniqueness and is reported as an error.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, DbError> {
        let query = Query::new()
            .eq("slug", slug)
            .eq("published", true)
            .limit(2);
        let mut rows = self.db.client()?.select(TABLE, &query).await?;

        match rows.len() {
            0 => Ok(None),
            1 => decode(RESOURCE, rows.remove(0)).map(Some),
            count => Err(StoreError::MultipleRows {
                table: TABLE.to_string(),
                count,
            }
            .into()),
        }
    }

    /// Every post including drafts, newest `created_at` first.
    pub async fn list_all(&self) -> Result<Vec<Post>, DbError> {
        let query = Query::new().order_desc("created_at");
        let rows = self.db.client()?.select(TABLE, &query).await?;
        decode_all(RESOURCE, rows)
    }

    /// Insert a post with only the fields that are set; returns the stored row.
    pub async fn create(&self, post: &NewPost) -> Result<Post, DbError> {
        let rows = self.db.client()?.insert(TABLE, post.to_row()).await?;
        let row = rows
            .into_iter()
            .next()
            .ok_or(DbError::NothingReturned { resource: RESOURCE })?;
        let created: Post = decode(RESOURCE, row)?;
        tracing::info!(id = %created.id, slug = %created.slug, "post created");
        Ok(created)
    }

    /// Apply the supplied fields to the post with `id`.
    ///
    /// Returns `None` when no post has this id. An empty patch writes
    /// nothing and returns the post as it is.
    pub async fn update(&self, id: &str, patch: &PostPatch) -> Result<Option<Post>, DbError> {
        let client = self.db.client()?;
        let changes = patch.to_row();

        let rows = if changes.is_empty() {
            client
                .select(TABLE, &Query::new().eq("id", id).limit(1))
                .await?
        } else {
            client
                .update(TABLE, &[Filter::eq("id", id)], changes)
                .await?
        };

        match rows.into_iter().next() {
            Some(row) => {
                let updated: Post = decode(RESOURCE, row)?;
                tracing::info!(id = %updated.id, "post updated");
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    /// Delete the post with `id`. Succeeds whether or not it existed.
    pub async fn delete(&self, id: &str) -> Result<(), DbError> {
        self.db
            .client()?
            .delete(TABLE, &[Filter::eq("id", id)])
            .await?;
        tracing::info!(id = %id, "post deleted");
        Ok(())
    }
}
