//! Client configuration
//!
//! Explicit configuration object passed into [`crate::rest::RestClient`];
//! nothing here is ambient or global. `from_env` reads the conventional
//! `OPENCGA_*` variables for CLI and test use.

use std::time::Duration;

use crate::error::{ClientError, ClientResult};

const DEFAULT_API_VERSION: &str = "v2";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("opencga-client/", env!("CARGO_PKG_VERSION"));

/// Connection settings for an OpenCGA server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    host: String,
    api_version: String,
    study: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given server host.
    ///
    /// The host is normalized: trailing slashes are stripped so endpoint
    /// construction is uniform.
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into().trim_end_matches('/').to_string();
        Self {
            host,
            api_version: DEFAULT_API_VERSION.to_string(),
            study: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Build a configuration from `OPENCGA_URL` and, when set,
    /// `OPENCGA_STUDY`.
    pub fn from_env() -> ClientResult<Self> {
        let host = std::env::var("OPENCGA_URL")
            .map_err(|_| ClientError::Config("OPENCGA_URL environment variable not set".into()))?;
        let mut config = Self::new(host);
        if let Ok(study) = std::env::var("OPENCGA_STUDY") {
            if !study.is_empty() {
                config.study = Some(study);
            }
        }
        Ok(config)
    }

    /// Default study scope, applied to every request that does not set one.
    pub fn with_study(mut self, study: impl Into<String>) -> Self {
        self.study = Some(study.into());
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn study(&self) -> Option<&str> {
        self.study.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
