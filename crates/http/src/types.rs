//! Wire types for the storefront identity API.
//!
//! The backend speaks camelCase JSON; every type here renames accordingly so
//! callers stay in snake_case.

use serde::{Deserialize, Serialize};

/// Account creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Optional ISO country code used for regional pricing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Login request; the identifier field accepts either a username or an email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Successful login/signup response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Opaque bearer credential; no client-side structure is assumed
    pub token: String,
    /// Always "Bearer" today, carried for forward compatibility
    pub token_type: String,
    pub user_id: u64,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Denormalized snapshot of the authenticated principal, taken from the
/// login/signup response and cached client-side for display purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: u64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<&AuthResponse> for UserProfile {
    fn from(response: &AuthResponse) -> Self {
        Self {
            user_id: response.user_id,
            username: response.username.clone(),
            email: response.email.clone(),
            role: response.role.clone(),
        }
    }
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    pub message: String,
    #[serde(default)]
    pub path: Option<String>,
}
