//! HTTP client for the Sanity data API.

use crate::config::{SanitySettings, Secret};
use crate::model::{Order, OrderId, OrderStatus};
use crate::store::{OrderStore, StoreError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::instrument;

/// Read query for the order list: every order with its items dereferenced.
pub const ORDERS_QUERY: &str = r#"*[_type == "order"]{_id, name, email, address, phone, paymentMethod, total, orderDate, status, items[]->{name, "imageUrl": image.asset->url}}"#;

const PREVIEW_CHARS: usize = 500;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Vec<Order>,
}

pub struct SanityStore {
    client: reqwest::Client,
    /// Live API host, used for mutations and for reads unless the CDN is enabled.
    api_base: String,
    /// Host for reads.
    query_base: String,
    api_version: String,
    dataset: String,
    token: Secret,
}

impl SanityStore {
    pub fn new(settings: &SanitySettings, token: Secret) -> Result<Self, StoreError> {
        let api_base = format!("https://{}.api.sanity.io", settings.project_id);
        let query_base = if settings.use_cdn {
            format!("https://{}.apicdn.sanity.io", settings.project_id)
        } else {
            api_base.clone()
        };
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base,
            query_base,
            api_version: settings.api_version.clone(),
            dataset: settings.dataset.clone(),
            token,
        })
    }

    /// Points both reads and writes at `base_url` (a local test server, a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        self.query_base = base_url.clone();
        self.api_base = base_url;
        self
    }

    pub fn query_url(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.query_base, self.api_version, self.dataset
        )
    }

    pub fn mutate_url(&self) -> String {
        format!(
            "{}/v{}/data/mutate/{}",
            self.api_base, self.api_version, self.dataset
        )
    }

    pub fn patch_status_body(id: &OrderId, status: &OrderStatus) -> Value {
        json!({
            "mutations": [
                { "patch": { "id": id.as_str(), "set": { "status": status.as_str() } } }
            ]
        })
    }

    pub fn delete_body(id: &OrderId) -> Value {
        json!({ "mutations": [ { "delete": { "id": id.as_str() } } ] })
    }

    async fn mutate(&self, body: Value) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.mutate_url())
            .bearer_auth(self.token.expose())
            .json(&body)
            .send()
            .await?;
        let body = checked_body(response).await?;
        tracing::debug!("Mutation acknowledged: {}", preview(&body));
        Ok(())
    }
}

/// Returns the body of a 2xx response; anything else becomes [`StoreError::Status`].
async fn checked_body(response: reqwest::Response) -> Result<String, StoreError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        tracing::error!("Store request failed with status {}: {}", status, preview(&body));
        return Err(StoreError::Status {
            status: status.as_u16(),
            body: preview(&body),
        });
    }
    Ok(body)
}

fn preview(body: &str) -> String {
    let preview: String = body.chars().take(PREVIEW_CHARS).collect();
    if preview.len() < body.len() {
        format!("{}...", preview)
    } else {
        preview
    }
}

#[async_trait]
impl OrderStore for SanityStore {
    #[instrument(skip(self), fields(dataset = %self.dataset))]
    async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError> {
        let response = self
            .client
            .get(self.query_url())
            .bearer_auth(self.token.expose())
            .header("Accept", "application/json")
            .query(&[("query", ORDERS_QUERY)])
            .send()
            .await?;
        let body = checked_body(response).await?;

        match serde_json::from_str::<QueryResponse>(&body) {
            Ok(parsed) => {
                tracing::debug!(count = parsed.result.len(), "Fetched orders");
                Ok(parsed.result)
            }
            Err(e) => {
                tracing::error!("Failed to parse query response: {}. Body: {}", e, preview(&body));
                Err(StoreError::Decode(e))
            }
        }
    }

    #[instrument(skip(self, id, status), fields(id = %id, status = %status))]
    async fn set_status(&self, id: &OrderId, status: &OrderStatus) -> Result<(), StoreError> {
        self.mutate(Self::patch_status_body(id, status)).await
    }

    #[instrument(skip(self, id), fields(id = %id))]
    async fn delete_order(&self, id: &OrderId) -> Result<(), StoreError> {
        self.mutate(Self::delete_body(id)).await
    }
}
