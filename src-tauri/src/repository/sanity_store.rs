//! Hosted Document Store Client
//!
//! Repository<Order> over the Sanity HTTP API: GROQ queries for reads and
//! the mutate endpoint for create/patch/delete. No timeout or retry policy
//! beyond reqwest's defaults.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::StoreSettings;
use crate::domain::{Order, OrderFields, DomainError, DomainResult};
use super::traits::Repository;

const LIST_QUERY: &str = "*[_type == $type]";
const FIND_QUERY: &str = "*[_type == $type && _id == $id][0]";

#[derive(Deserialize)]
struct QueryResponse<R> {
    result: R,
}

#[derive(Deserialize)]
struct MutateResponse {
    #[serde(default)]
    results: Vec<MutationResult>,
}

#[derive(Deserialize)]
struct MutationResult {
    #[serde(default)]
    document: Option<Order>,
}

/// Document store reached over HTTP
pub struct SanityStore {
    client: reqwest::Client,
    /// `{host}/v{version}/data`, used for mutations
    api_base: String,
    /// Same as `api_base`, or the CDN host when enabled
    query_base: String,
    dataset: String,
    token: Option<String>,
    document_type: String,
}

impl SanityStore {
    pub fn new(settings: &StoreSettings) -> Self {
        let version = settings.api_version.trim_start_matches('v');
        Self {
            client: reqwest::Client::new(),
            api_base: format!("{}/v{}/data", settings.api_host(), version),
            query_base: format!("{}/v{}/data", settings.query_host(), version),
            dataset: settings.dataset.clone(),
            token: settings.token.clone().filter(|t| !t.is_empty()),
            document_type: settings.document_type.clone(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Run a GROQ query; `params` values are JSON-encoded as `$name` pairs
    async fn query<R: DeserializeOwned>(&self, groq: &str, params: &[(&str, &str)]) -> DomainResult<R> {
        let url = format!("{}/query/{}", self.query_base, self.dataset);
        let mut pairs = vec![("query".to_string(), groq.to_string())];
        for (name, value) in params {
            pairs.push((format!("${}", name), Value::from(*value).to_string()));
        }

        log::debug!("GROQ {} on {}", groq, self.dataset);
        let response = self
            .authorized(self.client.get(url).query(&pairs))
            .send()
            .await
            .map_err(request_failed)?;
        let body: QueryResponse<R> = read_json(response).await?;
        Ok(body.result)
    }

    /// Submit one mutation and return the documents it touched
    async fn mutate(&self, mutation: Value) -> DomainResult<Vec<MutationResult>> {
        let url = format!("{}/mutate/{}", self.api_base, self.dataset);
        let response = self
            .authorized(
                self.client
                    .post(url)
                    .query(&[("returnDocuments", "true")])
                    .json(&json!({ "mutations": [mutation] })),
            )
            .send()
            .await
            .map_err(request_failed)?;
        let body: MutateResponse = read_json(response).await?;
        Ok(body.results)
    }

    fn document_body(&self, fields: &OrderFields) -> DomainResult<Value> {
        let mut body = serde_json::to_value(fields)
            .map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        if let Value::Object(map) = &mut body {
            map.insert("_type".to_string(), Value::from(self.document_type.as_str()));
        }
        Ok(body)
    }
}

fn request_failed(e: reqwest::Error) -> DomainError {
    DomainError::Internal(format!("Store request failed: {}", e))
}

fn returned_document(results: Vec<MutationResult>, action: &str) -> DomainResult<Order> {
    results
        .into_iter()
        .find_map(|r| r.document)
        .ok_or_else(|| DomainError::Internal(format!("Store returned no document for {}", action)))
}

async fn read_json<R: DeserializeOwned>(response: Response) -> DomainResult<R> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    response
        .json::<R>()
        .await
        .map_err(|e| DomainError::Internal(format!("Invalid store response: {}", e)))
}

/// Map a non-success HTTP status to a domain error
fn status_error(status: StatusCode, body: &str) -> DomainError {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/description").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string());
    let msg = format!("store returned {}: {}", status, detail);
    match status {
        StatusCode::NOT_FOUND => DomainError::NotFound(msg),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => DomainError::InvalidInput(msg),
        StatusCode::CONFLICT => DomainError::Conflict(msg),
        _ => DomainError::Internal(msg),
    }
}

#[async_trait]
impl Repository<Order> for SanityStore {
    async fn list(&self) -> DomainResult<Vec<Order>> {
        self.query(LIST_QUERY, &[("type", self.document_type.as_str())]).await
    }

    async fn find_by_id(&self, id: &String) -> DomainResult<Option<Order>> {
        self.query(FIND_QUERY, &[("type", self.document_type.as_str()), ("id", id.as_str())]).await
    }

    async fn create(&self, fields: &OrderFields) -> DomainResult<Order> {
        let body = self.document_body(fields)?;
        let results = self.mutate(json!({ "create": body })).await?;
        returned_document(results, "create")
    }

    async fn patch(&self, id: &String, fields: &OrderFields) -> DomainResult<Order> {
        let set = serde_json::to_value(fields)
            .map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        let results = self.mutate(json!({ "patch": { "id": id, "set": set } })).await?;
        returned_document(results, "patch")
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        self.mutate(json!({ "delete": { "id": id } })).await?;
        Ok(())
    }
}
