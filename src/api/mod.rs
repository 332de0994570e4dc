// =============================================================================
// Toorrii Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Error Types
// 3. Endpoints
// 4. API Client
// =============================================================================

pub mod contact;

pub use contact::*;

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

// -----------------------------------------------------------------------------
// 2. Error Types
// -----------------------------------------------------------------------------

/// API error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    /// Map a non-success HTTP status to an error.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => ApiError::NotFound,
            _ => ApiError::Server { status, message },
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Endpoints
// -----------------------------------------------------------------------------

/// Method and path of one backend route.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

impl Endpoint {
    pub fn post(path: &'static str) -> Self {
        Self {
            method: Method::POST,
            path,
        }
    }
}

// -----------------------------------------------------------------------------
// 4. API Client
// -----------------------------------------------------------------------------

/// HTTP client for the content API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build_request(&self, endpoint: &Endpoint) -> RequestBuilder {
        RequestBuilder::new(&self.url(endpoint.path))
            .method(endpoint.method.clone())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        match status {
            200..=299 => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Deserialize(e.to_string())),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::from_status(status, message))
            }
        }
    }

    /// Call an endpoint with a JSON body.
    pub async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .build_request(endpoint)
            .json(body)
            .map_err(|e| ApiError::Deserialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Call an endpoint without a body.
    pub async fn send<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let response = self
            .build_request(endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(404, String::new()), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(500, "boom".to_string()),
            ApiError::Server { status: 500, message: "boom".to_string() }
        );
        assert_eq!(
            ApiError::from_status(401, String::new()).to_string(),
            "Server error: 401 - "
        );
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("https://api.toorrii.com/");
        assert_eq!(client.url("/"), "https://api.toorrii.com/");
        assert_eq!(
            client.url(CONTACT_ENDPOINT),
            "https://api.toorrii.com/admins/contacte/ajouter/"
        );
    }
}
