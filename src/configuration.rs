//! Client configuration.
//!
//! A [`Configuration`] carries everything the client needs to reach the
//! SyncFlow API: the server base URL, the project id, and the API key/secret
//! pair used to self-issue bearer tokens. It is constructed once at startup
//! (from CLI flags or the environment) and passed by reference to the client
//! constructor. Environment reads live only in this module and are invoked
//! from the process entry point, never from client internals.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

pub const ENV_API_URL: &str = "SYNCFLOW_API_URL";
pub const ENV_PROJECT_ID: &str = "SYNCFLOW_PROJECT_ID";
pub const ENV_API_KEY: &str = "SYNCFLOW_API_KEY";
pub const ENV_API_SECRET: &str = "SYNCFLOW_API_SECRET";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("missing value for property {name:?}")]
    MissingRequiredPropertyValue { name: String },
    #[error("missing environment variable {name:?}")]
    MissingEnvironmentVariable { name: String },
    #[error("invalid server URL: {0}")]
    InvalidServerUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    server_url: Url,
    project_id: String,
    api_key: String,
    api_secret: String,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Build a configuration entirely from the `SYNCFLOW_*` environment
    /// variables. Intended for SDK users; the CLI resolves flags first and
    /// falls back to the same variables through clap.
    pub fn from_env() -> Result<Configuration, ConfigurationError> {
        debug!("Loading configuration from the environment...");
        let server_url = require_env(ENV_API_URL)?;
        Configuration::builder()
            .server_url(Url::parse(&server_url)?)
            .project_id(require_env(ENV_PROJECT_ID)?)
            .api_key(require_env(ENV_API_KEY)?)
            .api_secret(require_env(ENV_API_SECRET)?)
            .build()
    }

    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

fn require_env(name: &str) -> Result<String, ConfigurationError> {
    std::env::var(name).map_err(|_| ConfigurationError::MissingEnvironmentVariable {
        name: name.to_string(),
    })
}

#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    server_url: Option<Url>,
    project_id: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
}

impl ConfigurationBuilder {
    fn new() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn server_url(mut self, server_url: Url) -> ConfigurationBuilder {
        self.server_url = Some(server_url);
        self
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> ConfigurationBuilder {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> ConfigurationBuilder {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn api_secret(mut self, api_secret: impl Into<String>) -> ConfigurationBuilder {
        self.api_secret = Some(api_secret.into());
        self
    }

    pub fn build(self) -> Result<Configuration, ConfigurationError> {
        Ok(Configuration {
            server_url: self.server_url.ok_or_else(|| missing("server_url"))?,
            project_id: self.project_id.ok_or_else(|| missing("project_id"))?,
            api_key: self.api_key.ok_or_else(|| missing("api_key"))?,
            api_secret: self.api_secret.ok_or_else(|| missing("api_secret"))?,
        })
    }
}

fn missing(name: &str) -> ConfigurationError {
    ConfigurationError::MissingRequiredPropertyValue {
        name: name.to_string(),
    }
}
