//! HTTP client for the roster `/employees` endpoints.
//!
//! Wraps list, create, update and delete using [`reqwest`]. Mutations
//! return the server's acknowledgement message; callers re-list to observe
//! the effect.

use roster_core::employee::{Employee, EmployeeInput};
use roster_core::types::DbId;
use serde::Deserialize;

use crate::config::ClientConfig;

/// HTTP client for a roster API instance.
#[derive(Debug, Clone)]
pub struct EmployeeApi {
    client: reqwest::Client,
    api_url: String,
}

/// `{ "message": ... }` body returned by every mutating endpoint.
#[derive(Debug, Deserialize)]
struct Acknowledgement {
    message: String,
}

/// Errors from the roster API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Roster API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl EmployeeApi {
    /// Create a client for the API at `config.api_url`.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
        }
    }

    /// `GET /employees` -- every employee, newest first.
    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self.client.get(self.collection_url()).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /employees`
    pub async fn create(&self, input: &EmployeeInput) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(input)
            .send()
            .await?;
        Self::acknowledgement(response).await
    }

    /// `PUT /employees/{id}`
    pub async fn update(&self, id: DbId, input: &EmployeeInput) -> Result<String, ApiError> {
        let response = self
            .client
            .put(self.member_url(id))
            .json(input)
            .send()
            .await?;
        Self::acknowledgement(response).await
    }

    /// `DELETE /employees/{id}`
    pub async fn delete(&self, id: DbId) -> Result<String, ApiError> {
        let response = self.client.delete(self.member_url(id)).send().await?;
        Self::acknowledgement(response).await
    }

    // ---- private helpers ----

    fn collection_url(&self) -> String {
        format!("{}/employees", self.api_url)
    }

    fn member_url(&self, id: DbId) -> String {
        format!("{}/employees/{id}", self.api_url)
    }

    /// Ensure the response has a success status code, otherwise capture the
    /// status and body text as an [`ApiError::Api`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn acknowledgement(response: reqwest::Response) -> Result<String, ApiError> {
        let ack: Acknowledgement = Self::parse_response(response).await?;
        Ok(ack.message)
    }
}
