//! Authentication calls.
//!
//! Register and login send form-url-encoded bodies, not JSON.

use tracing::{info, warn};

use super::ApiClient;
use crate::error::Result;
use crate::models::{LoginResponse, MessageResponse, Profile, RegisterResponse, User};

/// Authentication call group.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create an account. Does not sign the user in.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse> {
        let response: RegisterResponse = self
            .client
            .post_form(
                "/user/register",
                &[
                    ("username", username),
                    ("email", email),
                    ("password", password),
                ],
            )
            .await?;

        info!(username = %username, user_id = response.user_id, "Registered");
        Ok(response)
    }

    /// Log in and persist the returned user as the current session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response: LoginResponse = self
            .client
            .post_form("/user/login", &[("email", email), ("password", password)])
            .await?;

        info!(
            username = %response.username,
            user_id = response.user_id,
            "Login successful"
        );
        self.client.session().sign_in(User::from(&response))?;

        Ok(response)
    }

    /// Log out on the backend, then drop the local record.
    ///
    /// The local sign-out happens even if the call fails; the call's error is
    /// still returned.
    pub async fn logout(&self) -> Result<MessageResponse> {
        let result = self.client.get("/user/logout").await;

        if let Err(e) = &result {
            warn!(error = %e, "Logout call failed, signing out locally");
        }
        if let Err(e) = self.client.session().sign_out() {
            warn!(error = %e, "Failed to clear session record");
        }

        result
    }

    pub async fn get_profile(&self) -> Result<Profile> {
        self.client.get("/user/profile").await
    }
}
