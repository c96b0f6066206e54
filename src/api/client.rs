//! Shared HTTP core of the API client.
//!
//! Every call group goes through [`ApiClient::send`], which carries the two
//! hooks of the client: bearer-token injection on the way out and session
//! expiry on a 401 on the way back.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{cookie::Jar, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{ActivityApi, AlbumsApi, ArtistsApi, AuthApi, PlaylistsApi, SongsApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::models::common::ErrorBody;
use crate::session::Session;

/// Client for the AlgoRythm backend.
///
/// Cheap to clone; clones share the connection pool, cookie jar and session.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use algorythm::{ApiClient, ClientConfig, Session};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let session = Arc::new(Session::in_memory());
///     let api = ApiClient::new(ClientConfig::default(), session)?;
///
///     api.auth().login("alice@example.com", "secret").await?;
///     for song in api.songs().search_songs("dreams").await? {
///         println!("{} ({})", song.song_title, song.duration_formatted());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Arc<str>,
    session: Arc<Session>,
    cookies: Arc<Jar>,
}

impl ApiClient {
    /// Build a client for the configured backend.
    ///
    /// The client keeps session cookies, sends `Content-Type:
    /// application/json` unless a call overrides it, and sets no timeout.
    pub fn new(config: ClientConfig, session: Arc<Session>) -> Result<Self> {
        let base_url = config.normalized_base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let cookies = Arc::new(Jar::default());
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .cookie_provider(cookies.clone())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            session,
            cookies,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Cookie jar holding the backend session cookie.
    pub fn cookies(&self) -> &Arc<Jar> {
        &self.cookies
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn songs(&self) -> SongsApi<'_> {
        SongsApi::new(self)
    }

    pub fn activity(&self) -> ActivityApi<'_> {
        ActivityApi::new(self)
    }

    pub fn playlists(&self) -> PlaylistsApi<'_> {
        PlaylistsApi::new(self)
    }

    pub fn artists(&self) -> ArtistsApi<'_> {
        ArtistsApi::new(self)
    }

    pub fn albums(&self) -> AlbumsApi<'_> {
        AlbumsApi::new(self)
    }

    /// Start a request to `path`, with the bearer token attached when the
    /// persisted user carries one.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "Sending request");

        let builder = self.http.request(method, &url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode the JSON body.
    ///
    /// An empty success body decodes as JSON `null`, so callers that expect
    /// nothing ask for `serde_json::Value` or `Option<T>`.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            self.session.expire();
            return Err(ApiError::Unauthorized(error_message(status, &text)));
        }

        if !status.is_success() {
            let message = error_message(status, &text);
            warn!(status = status.as_u16(), error = %message, "Request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: &str = if text.trim().is_empty() { "null" } else { &text };
        Ok(serde_json::from_str(body)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::GET, path)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::DELETE, path)).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// POST a form-url-encoded body.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T> {
        self.send(self.request(Method::POST, path).form(form)).await
    }
}

/// Pull the backend's `{"error": "..."}` message out of an error body.
fn error_message(status: StatusCode, text: &str) -> String {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
        return body.error;
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_backend_field() {
        let msg = error_message(StatusCode::NOT_FOUND, r#"{"error": "Song not found"}"#);
        assert_eq!(msg, "Song not found");
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Internal Server Error"
        );
    }

    #[test]
    fn test_new_normalizes_base_url() {
        let session = Arc::new(Session::in_memory());
        let api = ApiClient::new(ClientConfig::new("http://localhost:8080/Algorythm/"), session)
            .unwrap();
        assert_eq!(api.base_url(), "http://localhost:8080/Algorythm");
    }

    #[test]
    fn test_new_rejects_bad_scheme() {
        let session = Arc::new(Session::in_memory());
        let err = ApiClient::new(ClientConfig::new("ftp://example.com"), session).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
