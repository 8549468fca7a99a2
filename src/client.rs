//! SyncFlow project API client.
//!
//! [`ProjectClient`] is an authenticated HTTP facade over the project
//! endpoints: one method per endpoint, each attaching a self-issued bearer
//! token (see [`crate::token`]) and parsing the JSON response into the typed
//! models from [`crate::model`]. There are no retries and no local state
//! beyond the cached token; every failure surfaces to the caller.

use crate::configuration::Configuration;
use crate::model::{
    CreateSessionRequest, DeviceResponse, ParticipantInfo, ProjectInfo, ProjectSessionResponse,
    ProjectSummary, RegisterDeviceRequest, TokenRequest, TokenResponse,
};
use crate::token::{self, TokenError};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::trace;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport or protocol level failure, propagated unmodified
    #[error("error during HTTP request: {0}")]
    HttpError(#[from] reqwest::Error),
    /// The server answered with a non-2xx status
    #[error("unexpected response from server ({status}): {body}")]
    UnexpectedResponse { status: StatusCode, body: String },
    /// The response body did not match the expected model shape
    #[error("failed to parse response body: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    TokenError(#[from] TokenError),
}

/// Authenticated client for a single SyncFlow project.
///
/// Holds one connection pool for its lifetime; the pool is released when the
/// client is dropped. The token cache is process-local and never persisted.
pub struct ProjectClient {
    configuration: Configuration,
    base_url: String,
    http_client: reqwest::Client,
    api_token: std::sync::Mutex<Option<String>>,
}

impl ProjectClient {
    pub fn new(configuration: &Configuration) -> Result<ProjectClient, ClientError> {
        let http_client = reqwest::Client::builder().build()?;
        let base_url = configuration
            .server_url()
            .as_str()
            .trim_end_matches('/')
            .to_string();

        Ok(ProjectClient {
            configuration: configuration.clone(),
            base_url,
            http_client,
            api_token: std::sync::Mutex::new(None),
        })
    }

    /// Return the current API token, reissuing it when missing or expired.
    ///
    /// The cached token is decoded and signature-verified on every call; a
    /// verification failure is a hard error, not a trigger for reissue.
    pub fn api_token(&self) -> Result<String, ClientError> {
        let mut cached = self.api_token.lock().expect("API token cache poisoned");

        if let Some(current) = cached.as_ref() {
            let claims = token::decode(current, self.configuration.api_secret())?;
            if !claims.is_expired() {
                return Ok(current.clone());
            }
            trace!("Cached API token expired, reissuing...");
        }

        let fresh = token::issue(
            self.configuration.api_key(),
            self.configuration.api_secret(),
            self.configuration.project_id(),
        )?;
        *cached = Some(fresh.clone());
        Ok(fresh)
    }

    pub async fn get_project_details(&self) -> Result<ProjectInfo, ClientError> {
        self.get(&self.project_path("")).await
    }

    pub async fn delete_project(&self) -> Result<ProjectInfo, ClientError> {
        self.delete(&self.project_path("")).await
    }

    pub async fn summarize_project(&self) -> Result<ProjectSummary, ClientError> {
        self.get(&self.project_path("/summarize")).await
    }

    pub async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<ProjectSessionResponse, ClientError> {
        self.post(&self.project_path("/create-session"), Some(request))
            .await
    }

    pub async fn list_sessions(&self) -> Result<Vec<ProjectSessionResponse>, ClientError> {
        self.get(&self.project_path("/sessions")).await
    }

    pub async fn list_session(
        &self,
        session_id: &str,
    ) -> Result<ProjectSessionResponse, ClientError> {
        self.get(&self.session_path(session_id, "")).await
    }

    pub async fn list_participants(
        &self,
        session_id: &str,
    ) -> Result<Vec<ParticipantInfo>, ClientError> {
        self.get(&self.session_path(session_id, "/participants"))
            .await
    }

    pub async fn generate_session_token(
        &self,
        session_id: &str,
        request: &TokenRequest,
    ) -> Result<TokenResponse, ClientError> {
        self.post(&self.session_path(session_id, "/token"), Some(request))
            .await
    }

    /// The media backend does not publish a stable schema for this payload,
    /// so it is returned as raw JSON.
    pub async fn get_livekit_session_info(
        &self,
        session_id: &str,
    ) -> Result<serde_json::Value, ClientError> {
        self.get(&self.session_path(session_id, "/livekit-session-info"))
            .await
    }

    pub async fn stop_session(
        &self,
        session_id: &str,
    ) -> Result<ProjectSessionResponse, ClientError> {
        self.post::<ProjectSessionResponse, ()>(&self.session_path(session_id, "/stop"), None)
            .await
    }

    pub async fn register_device(
        &self,
        request: &RegisterDeviceRequest,
    ) -> Result<DeviceResponse, ClientError> {
        self.post(&self.project_path("/devices/register"), Some(request))
            .await
    }

    pub async fn list_devices(&self) -> Result<Vec<DeviceResponse>, ClientError> {
        self.get(&self.project_path("/devices")).await
    }

    pub async fn list_device(&self, device_id: &str) -> Result<DeviceResponse, ClientError> {
        self.get(&self.project_path(&format!("/devices/{}", device_id)))
            .await
    }

    pub async fn delete_device(&self, device_id: &str) -> Result<DeviceResponse, ClientError> {
        self.delete(&self.project_path(&format!("/devices/{}", device_id)))
            .await
    }

    fn project_path(&self, suffix: &str) -> String {
        format!(
            "{}/projects/{}{}",
            self.base_url,
            self.configuration.project_id(),
            suffix
        )
    }

    fn session_path(&self, session_id: &str, suffix: &str) -> String {
        self.project_path(&format!("/sessions/{}{}", session_id, suffix))
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        self.execute_request(self.http_client.get(url)).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let mut request = self.http_client.post(url);
        if let Some(body) = body {
            request = request.body(serde_json::to_string(body)?);
        }
        self.execute_request(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        self.execute_request(self.http_client.delete(url)).await
    }

    /// Attach the auth headers, send the request, and parse the response.
    ///
    /// Non-2xx responses are wrapped with their status and raw body text and
    /// never retried.
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let api_token = self.api_token()?;

        let response = request
            .header("Authorization", format!("Bearer {}", api_token))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::UnexpectedResponse { status, body });
        }

        trace!("Raw response body: {}", body);
        Ok(serde_json::from_str::<T>(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn test_client() -> ProjectClient {
        let configuration = Configuration::builder()
            .server_url(Url::parse("http://api.test").unwrap())
            .project_id("p1")
            .api_key("k")
            .api_secret("s")
            .build()
            .unwrap();
        ProjectClient::new(&configuration).unwrap()
    }

    #[test]
    fn token_is_reused_within_validity_window() {
        let client = test_client();
        let first = client.api_token().unwrap();
        let second = client.api_token().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn expired_cached_token_is_reissued() {
        let client = test_client();

        // forge a token that expired long ago, signed with the same secret
        let stale = crate::token::ProjectTokenClaims {
            iat: 1000,
            iss: "k".to_string(),
            exp: 2000,
            project_id: "p1".to_string(),
        };
        let stale_token = jsonwebtoken::encode(
            &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
            &stale,
            &jsonwebtoken::EncodingKey::from_secret(b"s"),
        )
        .unwrap();
        *client.api_token.lock().unwrap() = Some(stale_token.clone());

        let fresh = client.api_token().unwrap();
        assert_ne!(fresh, stale_token);

        let claims = token::decode(&fresh, "s").unwrap();
        assert!(!claims.is_expired());
        assert_eq!(claims.project_id, "p1");
    }

    #[test]
    fn tampered_cached_token_is_a_hard_error() {
        let client = test_client();

        // signed with a different secret: verification must fail, not reissue
        let foreign = token::issue("k", "not-the-secret", "p1").unwrap();
        *client.api_token.lock().unwrap() = Some(foreign);

        let result = client.api_token();
        assert!(matches!(result, Err(ClientError::TokenError(_))));
    }

    #[test]
    fn paths_are_scoped_to_the_project() {
        let client = test_client();
        assert_eq!(client.project_path(""), "http://api.test/projects/p1");
        assert_eq!(
            client.session_path("s1", "/stop"),
            "http://api.test/projects/p1/sessions/s1/stop"
        );
    }
}
