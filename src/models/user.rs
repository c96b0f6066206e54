//! User and authentication models.

use serde::{Deserialize, Serialize};

use super::common::EntityId;

/// The persisted current-user record.
///
/// Every field defaults, so an empty record (`{}`) is a user without a token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<EntityId>,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,

    /// Bearer token injected into every outgoing request when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl User {
    /// Create a user record without a token.
    pub fn new<S1: Into<String>, S2: Into<String>>(username: S1, email: S2) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Attach a bearer token.
    pub fn with_token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The token, if one is present and non-empty.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Response from a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: EntityId,
    #[serde(default)]
    pub message: String,
}

/// Response from a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: EntityId,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_type: Option<String>,
    /// Only present when the backend issues tokens; otherwise the session
    /// cookie carries authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&LoginResponse> for User {
    fn from(login: &LoginResponse) -> Self {
        Self {
            user_id: Some(login.user_id),
            username: login.username.clone(),
            email: login.email.clone(),
            token: login.token.clone(),
        }
    }
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: EntityId,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_type: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_active: bool,
}
