//! HTTP Ticket Service
//!
//! `reqwest` client for the ticket service. On wasm32 reqwest goes through the
//! browser's `fetch`, so no timeout is set here.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::TicketApi;
use crate::error::{SyncError, SyncResult};
use crate::models::{NewTicket, NewUser, StatusUpdate, Ticket, User};

/// Error body the service returns alongside a 4xx/5xx
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the body of a 2xx response
    async fn execute(&self, method: &'static str, path: &str, request: RequestBuilder) -> SyncResult<String> {
        log::debug!("{} {}", method, path);
        let response = request
            .send()
            .await
            .map_err(|e| SyncError::request(method, path, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SyncError::request(method, path, e.to_string()))?;

        if !status.is_success() {
            return Err(SyncError::status(method, path, status.as_u16(), error_detail(status, &body)));
        }
        Ok(body)
    }
}

/// Prefer the service's `{"error": ...}` message, then the raw body, then the reason phrase
fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.chars().take(200).collect();
    }
    status.canonical_reason().unwrap_or("Unknown").to_string()
}

fn decode_list<T: DeserializeOwned>(path: &str, body: &str) -> SyncResult<Vec<T>> {
    serde_json::from_str(body).map_err(|e| SyncError::schema(path, e.to_string()))
}

#[async_trait(?Send)]
impl TicketApi for HttpApi {
    async fn list_tickets(&self) -> SyncResult<Vec<Ticket>> {
        let path = "/tickets";
        let body = self.execute("GET", path, self.client.get(self.endpoint(path))).await?;
        decode_list(path, &body)
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> SyncResult<()> {
        let path = "/tickets";
        let request = self.client.post(self.endpoint(path)).json(ticket);
        self.execute("POST", path, request).await.map(|_| ())
    }

    async fn update_ticket(&self, id: i64, update: &StatusUpdate) -> SyncResult<()> {
        let path = format!("/tickets/{}", id);
        let request = self.client.put(self.endpoint(&path)).json(update);
        self.execute("PUT", &path, request).await.map(|_| ())
    }

    async fn delete_ticket(&self, id: i64) -> SyncResult<()> {
        let path = format!("/tickets/{}", id);
        let request = self.client.delete(self.endpoint(&path));
        self.execute("DELETE", &path, request).await.map(|_| ())
    }

    async fn list_users(&self) -> SyncResult<Vec<User>> {
        let path = "/users";
        let body = self.execute("GET", path, self.client.get(self.endpoint(path))).await?;
        decode_list(path, &body)
    }

    async fn create_user(&self, user: &NewUser) -> SyncResult<()> {
        let path = "/users";
        let request = self.client.post(self.endpoint(path)).json(user);
        self.execute("POST", path, request).await.map(|_| ())
    }
}
