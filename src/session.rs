//! Authenticated session context
//!
//! A [`Session`] owns the [`RestClient`] plus the identity it was opened
//! with, and hands out resource wrappers that borrow it. The session is an
//! explicit dependency: construct one and pass it where it is needed; there
//! is no ambient global. Re-authentication produces a new session.

use crate::catalog::{FamilyClient, PanelClient, UserClient};
use crate::clinical::ClinicalAnalysisClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::rest::RestClient;

/// An open connection to one OpenCGA server, optionally authenticated.
pub struct Session {
    rest: RestClient,
    user: Option<String>,
}

impl Session {
    /// Authenticate with user and password and open a session.
    pub async fn login(config: ClientConfig, user: &str, password: &str) -> ClientResult<Self> {
        let rest = RestClient::new(config)?;
        let auth = UserClient::new(&rest).login(user, password).await?;
        tracing::debug!(user, "opened OpenCGA session");
        Ok(Self {
            rest: rest.with_token(auth.token),
            user: Some(user.to_string()),
        })
    }

    /// Open a session around an existing token (e.g. from `OPENCGA_TOKEN`).
    pub fn from_token(config: ClientConfig, token: impl Into<String>) -> ClientResult<Self> {
        Ok(Self {
            rest: RestClient::new(config)?.with_token(token),
            user: None,
        })
    }

    /// Open an unauthenticated session; only public endpoints will resolve.
    pub fn anonymous(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            rest: RestClient::new(config)?,
            user: None,
        })
    }

    /// Swap the token for a fresh one using the refresh token.
    pub async fn refresh(&mut self, refresh_token: &str) -> ClientResult<()> {
        let auth = UserClient::new(&self.rest).refresh(refresh_token).await?;
        self.rest.set_token(Some(auth.token));
        Ok(())
    }

    /// The token expected by authenticated endpoints.
    pub fn token(&self) -> ClientResult<&str> {
        self.rest.token().ok_or(ClientError::NotLoggedIn)
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn study(&self) -> Option<&str> {
        self.rest.config().study()
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn panels(&self) -> PanelClient<'_> {
        PanelClient::new(&self.rest)
    }

    pub fn families(&self) -> FamilyClient<'_> {
        FamilyClient::new(&self.rest)
    }

    pub fn clinical(&self) -> ClinicalAnalysisClient<'_> {
        ClinicalAnalysisClient::new(&self.rest)
    }

    pub fn users(&self) -> UserClient<'_> {
        UserClient::new(&self.rest)
    }
}
