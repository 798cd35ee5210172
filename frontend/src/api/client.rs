use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;

        if let Some(result) = mock_hook::respond(&request) {
            return result;
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok(ApiResponse { status, body })
    }
}

/// A fully buffered response; the attendance endpoints return small JSON bodies.
#[derive(Debug)]
pub(crate) struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let response = self.error_for_status()?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub fn empty(self) -> Result<(), ApiError> {
        self.error_for_status().map(|_| ())
    }

    fn error_for_status(self) -> Result<Self, ApiError> {
        if self.status.is_success() {
            return Ok(self);
        }
        Err(serde_json::from_str::<ApiError>(&self.body).unwrap_or_else(|_| {
            ApiError::request_failed(format!("Request failed with status {}", self.status))
        }))
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
mod mock_hook {
    use super::{ApiError, ApiResponse};

    pub fn respond(_request: &reqwest::Request) -> Option<Result<ApiResponse, ApiError>> {
        None
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_hook::{register_mock, MockResponse, TestResponder};
