//! HTTP client for the pet service.
//!
//! Wraps the five `/api/pets` endpoints using [`reqwest`]. Every method
//! issues exactly one request; there is no retry, caching or offline queue.

use petcatalog_core::pet::PetFields;
use petcatalog_core::types::PetId;
use reqwest::StatusCode;

use crate::models::{MessageBody, Pet};

/// Address the client uses when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/pets";

/// HTTP client for the pet service.
#[derive(Debug, Clone)]
pub struct PetClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the client data layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The service's `message`, or the raw body if it had none.
        message: String,
    },
}

impl ClientError {
    /// The server's message when it describes something the user can fix
    /// (missing record or rejected fields); `None` for unexpected failures.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { status, message }
                if *status == StatusCode::NOT_FOUND.as_u16()
                    || *status == StatusCode::BAD_REQUEST.as_u16() =>
            {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

impl PetClient {
    /// Create a client for the given base address, e.g.
    /// `http://localhost:5000/api/pets`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /` -- every pet.
    pub async fn list_pets(&self) -> Result<Vec<Pet>, ClientError> {
        let response = self.client.get(&self.base_url).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /{id}`
    pub async fn get_pet(&self, id: PetId) -> Result<Pet, ClientError> {
        let response = self.client.get(self.pet_url(id)).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /` -- create a pet; the service assigns id and timestamps.
    pub async fn create_pet(&self, fields: &PetFields) -> Result<Pet, ClientError> {
        let response = self.client.post(&self.base_url).json(fields).send().await?;
        Self::parse_response(response).await
    }

    /// `PUT /{id}` -- merge `fields` onto the stored pet.
    pub async fn update_pet(&self, id: PetId, fields: &PetFields) -> Result<Pet, ClientError> {
        let response = self.client.put(self.pet_url(id)).json(fields).send().await?;
        Self::parse_response(response).await
    }

    /// `DELETE /{id}` -- returns the service's confirmation message.
    pub async fn delete_pet(&self, id: PetId) -> Result<String, ClientError> {
        let response = self.client.delete(self.pet_url(id)).send().await?;
        let body: MessageBody = Self::parse_response(response).await?;
        Ok(body.message)
    }

    // ---- private helpers ----

    fn pet_url(&self, id: PetId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Return the response unchanged on a 2xx status, otherwise a
    /// [`ClientError::Api`] carrying the service's message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);

        tracing::debug!(status = status.as_u16(), %message, "Pet service returned an error");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let client = PetClient::new("http://localhost:5000/api/pets/");
        assert_eq!(client.base_url(), "http://localhost:5000/api/pets");
    }

    #[test]
    fn pet_url_appends_id() {
        let client = PetClient::new(DEFAULT_BASE_URL);
        let id = uuid::Uuid::nil();
        assert_eq!(
            client.pet_url(id),
            "http://localhost:5000/api/pets/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn only_not_found_and_validation_are_user_facing() {
        let not_found = ClientError::Api {
            status: 404,
            message: "Pet not found".into(),
        };
        let invalid = ClientError::Api {
            status: 400,
            message: "name is required".into(),
        };
        let internal = ClientError::Api {
            status: 500,
            message: "An internal error occurred".into(),
        };

        assert_eq!(not_found.user_message(), Some("Pet not found"));
        assert_eq!(invalid.user_message(), Some("name is required"));
        assert_eq!(internal.user_message(), None);
    }
}
