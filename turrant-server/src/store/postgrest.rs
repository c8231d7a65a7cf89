//! Supabase REST (PostgREST) client
//!
//! Table access over `{SUPABASE_URL}/rest/v1/{table}` with the anon key sent
//! both as `apikey` and as a bearer token.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use url::Url;

use super::{Filter, Query, Row, StoreError, TableClient};

/// Error bodies longer than this are cut before they reach logs or clients
const MAX_ERROR_CHARS: usize = 500;

/// PostgREST error body (only the part we surface)
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Supabase table client
pub struct PostgrestClient {
    client: Client,
    rest_url: Url,
    api_key: String,
}

impl PostgrestClient {
    /// Create a client for the project at `base_url` (e.g. `https://abc.supabase.co`).
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, url::ParseError> {
        let rest_url = Url::parse(&format!("{}/rest/v1/", base_url.trim_end_matches('/')))?;
        Ok(Self {
            client: Client::new(),
            rest_url,
            api_key: api_key.into(),
        })
    }

    /// REST endpoint for a table
    pub fn table_url(&self, table: &str) -> Result<Url, url::ParseError> {
        self.rest_url.join(table)
    }

    /// Full URL for a select: `?select=*&col=eq.v&order=col.dir&limit=n`
    pub fn select_url(&self, table: &str, query: &Query) -> Result<Url, url::ParseError> {
        let mut url = self.table_url(table)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for filter in &query.filters {
                pairs.append_pair(&filter.column, &filter.operand());
            }
            if let Some(order) = &query.order {
                pairs.append_pair("order", &order.param());
            }
            if let Some(limit) = query.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        Ok(url)
    }

    /// URL addressing the rows matched by `filters` (update/delete)
    pub fn filtered_url(&self, table: &str, filters: &[Filter]) -> Result<Url, url::ParseError> {
        let mut url = self.table_url(table)?;
        {
            let mut pairs = url.query_pairs_mut();
            for filter in filters {
                pairs.append_pair(&filter.column, &filter.operand());
            }
        }
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = self.authorized(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&error_text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or(error_text);
            return Err(StoreError::Status {
                status,
                message: truncate(&message),
            });
        }

        Ok(response)
    }

    async fn rows(response: Response) -> Result<Vec<Row>, StoreError> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_ERROR_CHARS {
        let head: String = text.chars().take(MAX_ERROR_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[async_trait]
impl TableClient for PostgrestClient {
    #[tracing::instrument(skip_all, fields(table = %table))]
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Row>, StoreError> {
        let url = self.select_url(table, query)?;
        tracing::debug!(%url, "select");
        let response = self.send(self.client.get(url)).await?;
        Self::rows(response).await
    }

    #[tracing::instrument(skip_all, fields(table = %table))]
    async fn insert(&self, table: &str, row: Row) -> Result<Vec<Row>, StoreError> {
        let url = self.table_url(table)?;
        let request = self
            .client
            .post(url)
            .header("Prefer", "return=representation")
            .json(&row);
        let response = self.send(request).await?;
        Self::rows(response).await
    }

    #[tracing::instrument(skip_all, fields(table = %table))]
    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Row,
    ) -> Result<Vec<Row>, StoreError> {
        let url = self.filtered_url(table, filters)?;
        let request = self
            .client
            .patch(url)
            .header("Prefer", "return=representation")
            .json(&patch);
        let response = self.send(request).await?;
        Self::rows(response).await
    }

    #[tracing::instrument(skip_all, fields(table = %table))]
    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), StoreError> {
        let url = self.filtered_url(table, filters)?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, RawQuery, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    #[test]
    fn select_url_shape() {
        let client = PostgrestClient::new("https://abc.supabase.co/", "key").unwrap();
        let query = Query::new()
            .eq("slug", "hello world")
            .eq("published", true)
            .order_desc("published_at")
            .limit(2);
        let url = client.select_url("blog_posts", &query).unwrap();

        assert_eq!(url.path(), "/rest/v1/blog_posts");
        assert_eq!(
            url.query(),
            Some("select=*&slug=eq.hello+world&published=eq.true&order=published_at.desc&limit=2")
        );
    }

    #[test]
    fn filtered_url_shape() {
        let client = PostgrestClient::new("https://abc.supabase.co", "key").unwrap();
        let url = client
            .filtered_url("blog_posts", &[Filter::eq("id", "42")])
            .unwrap();
        assert_eq!(url.as_str(), "https://abc.supabase.co/rest/v1/blog_posts?id=eq.42");
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(PostgrestClient::new("not a url", "key").is_err());
    }

    #[test]
    fn truncates_long_messages() {
        let long = "é".repeat(600);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_ERROR_CHARS + 3);
        assert_eq!(truncate("short"), "short");
    }

    #[derive(Clone, Default)]
    struct Seen(Arc<Mutex<Vec<(String, Option<String>, Option<String>)>>>);

    async fn fake_table(
        State(seen): State<Seen>,
        Path(table): Path<String>,
        RawQuery(query): RawQuery,
        headers: HeaderMap,
    ) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
        let apikey = headers
            .get("apikey")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.0.lock().unwrap().push((table.clone(), query, apikey));

        if table == "missing_table" {
            return Err((
                StatusCode::NOT_FOUND,
                Json(json!({"message": "relation \"missing_table\" does not exist"})),
            ));
        }
        Ok(Json(json!([{"id": "1", "name": "Compliance"}])))
    }

    async fn spawn_fake() -> (String, Seen) {
        let seen = Seen::default();
        let app = Router::new()
            .route("/rest/v1/{table}", get(fake_table))
            .with_state(seen.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), seen)
    }

    #[tokio::test]
    async fn select_sends_key_and_decodes_rows() {
        let (base, seen) = spawn_fake().await;
        let client = PostgrestClient::new(&base, "anon-key").unwrap();

        let rows = client
            .select("blog_categories", &Query::new().order_asc("name"))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), Some(&json!("Compliance")));

        let seen = seen.0.lock().unwrap();
        assert_eq!(seen[0].0, "blog_categories");
        assert_eq!(seen[0].1.as_deref(), Some("select=*&order=name.asc"));
        assert_eq!(seen[0].2.as_deref(), Some("anon-key"));
    }

    #[tokio::test]
    async fn error_status_carries_store_message() {
        let (base, _seen) = spawn_fake().await;
        let client = PostgrestClient::new(&base, "anon-key").unwrap();

        let err = client
            .select("missing_table", &Query::new())
            .await
            .unwrap_err();

        match err {
            StoreError::Status { status, message } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert!(message.contains("does not exist"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
