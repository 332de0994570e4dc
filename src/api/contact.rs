// =============================================================================
// Toorrii Web - Contact API
// =============================================================================
// Table of Contents:
// 1. Types
// 2. Contact API Functions
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError, Endpoint};

/// Backend route for contact records.
pub const CONTACT_ENDPOINT: &str = "/admins/contacte/ajouter/";

// -----------------------------------------------------------------------------
// 1. Types
// -----------------------------------------------------------------------------

/// Contact record as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactData {
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Contact form snapshot sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// -----------------------------------------------------------------------------
// 2. Contact API Functions
// -----------------------------------------------------------------------------

/// Route shared by contact info retrieval and submission.
pub fn contact_endpoint() -> Endpoint {
    Endpoint::post(CONTACT_ENDPOINT)
}

/// Fetch contact info from the backend (bodyless POST).
pub async fn get_contact_info(client: &ApiClient) -> Result<ContactData, ApiError> {
    client.send(&contact_endpoint()).await
}

/// Send a contact form submission.
pub async fn submit_contact(
    client: &ApiClient,
    submission: &ContactSubmission,
) -> Result<ContactData, ApiError> {
    client.send_json(&contact_endpoint(), submission).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_net::http::Method;

    #[test]
    fn test_contact_endpoint_is_post_to_contact_route() {
        let endpoint = contact_endpoint();
        assert_eq!(endpoint.method, Method::POST);
        assert_eq!(endpoint.path, "/admins/contacte/ajouter/");
        assert_eq!(
            ApiClient::new("http://localhost:8000").url(endpoint.path),
            "http://localhost:8000/admins/contacte/ajouter/"
        );
    }

    #[test]
    fn test_contact_data_tolerates_partial_payload() {
        let data: ContactData = serde_json::from_str(r#"{"id": 7, "name": "Amine"}"#).unwrap();
        assert_eq!(data.id, Some(7));
        assert_eq!(data.name, "Amine");
        assert!(data.email.is_empty());
        assert!(data.created_at.is_none());
    }

    #[test]
    fn test_contact_data_parses_timestamp() {
        let data: ContactData =
            serde_json::from_str(r#"{"created_at": "2024-05-01T10:30:00Z"}"#).unwrap();
        assert_eq!(data.created_at.unwrap().to_rfc3339(), "2024-05-01T10:30:00+00:00");
    }

    #[test]
    fn test_submission_body_shape() {
        let submission = ContactSubmission {
            name: "Amine".to_string(),
            email: "a@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Test".to_string(),
        };
        let body = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Amine", "email": "a@x.com", "subject": "Hi", "message": "Test"})
        );
    }
}
