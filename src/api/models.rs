//! Wire types for the TrashReporter API.

use crate::models::report::Coordinates;
use crate::models::user::User;
use serde::{Deserialize, Serialize};

/// Body of `POST {base_url}`.
#[derive(Debug, Serialize)]
pub struct SubmitRequest {
    pub image: String, // base64
    pub coords: Coordinates,
    pub id: String, // device identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl SubmitRequest {
    pub fn new(image: String, coords: Coordinates, id: String, comment: &str) -> Self {
        let comment = comment.trim();
        Self {
            image,
            coords,
            id,
            comment: if comment.is_empty() {
                None
            } else {
                Some(comment.to_string())
            },
        }
    }
}

/// Body of a successful submission response. Parsed leniently: the client
/// only hard-requires the 200 status.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub report_id: Option<i64>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// Error body shape used by the auth endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_reports: i64,
}
