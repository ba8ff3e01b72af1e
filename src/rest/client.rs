//! Shared HTTP core for the resource wrappers
//!
//! Every resource method is a thin mapping onto one of the verb helpers
//! here. The path grammar is
//! `{host}/webservices/rest/{version}/{category}[/{ids}]/{action}` with a
//! comma-joined id list; an empty id list omits the segment. Requests are
//! direct call-throughs: no retries, no caching, no request sequencing or
//! cancellation. When two writes race, the last response to resolve wins.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::rest::query::QueryParams;
use crate::rest::response::{Event, RestResponse};

const REST_PREFIX: &str = "webservices/rest";
const ERROR_BODY_SNIPPET: usize = 200;

/// HTTP client for one OpenCGA server, shared by all resource wrappers.
pub struct RestClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent().to_string())
            .build()?;

        Ok(Self {
            http,
            config,
            token: None,
        })
    }

    /// Attach the session token sent as `Authorization: Bearer`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `{category}[/{ids}]/{action}`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        category: &str,
        ids: &[&str],
        action: &str,
        params: QueryParams,
    ) -> ClientResult<RestResponse<T>> {
        let url = self.endpoint(category, ids, action, params)?;
        let request = self.http.get(url.clone());
        self.dispatch(request, &url).await
    }

    /// POST `{category}[/{ids}]/{action}` with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        category: &str,
        ids: &[&str],
        action: &str,
        params: QueryParams,
        body: &B,
    ) -> ClientResult<RestResponse<T>> {
        let url = self.endpoint(category, ids, action, params)?;
        let request = self.http.post(url.clone()).json(body);
        self.dispatch(request, &url).await
    }

    /// DELETE `{category}[/{ids}]/{action}`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        category: &str,
        ids: &[&str],
        action: &str,
        params: QueryParams,
    ) -> ClientResult<RestResponse<T>> {
        let url = self.endpoint(category, ids, action, params)?;
        let request = self.http.request(Method::DELETE, url.clone());
        self.dispatch(request, &url).await
    }

    /// Build the endpoint URL for a resource call.
    fn endpoint(
        &self,
        category: &str,
        ids: &[&str],
        action: &str,
        mut params: QueryParams,
    ) -> ClientResult<Url> {
        let mut url = Url::parse(self.config.host())
            .map_err(|e| ClientError::Url(format!("{}: {e}", self.config.host())))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::Url(format!("{} cannot be a base URL", self.config.host())))?;
            for part in REST_PREFIX.split('/') {
                segments.push(part);
            }
            segments.push(self.config.api_version());
            for part in category.split('/').filter(|s| !s.is_empty()) {
                segments.push(part);
            }
            let joined = join_ids(ids);
            if !joined.is_empty() {
                segments.push(&joined);
            }
            for part in action.split('/').filter(|s| !s.is_empty()) {
                segments.push(part);
            }
        }

        if let Some(study) = self.config.study() {
            params.set_default("study", study);
        }
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.pairs() {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> ClientResult<RestResponse<T>> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            tracing::warn!(%url, status, "OpenCGA request failed");
            return Err(ClientError::Api {
                status,
                events: salvage_error_events(&body),
            });
        }

        let envelope: RestResponse<T> = serde_json::from_str(&body).map_err(|source| {
            ClientError::Decode {
                endpoint: url.path().to_string(),
                source,
            }
        })?;
        envelope.ok_or_api_error(status)
    }
}

fn join_ids(ids: &[&str]) -> String {
    ids.iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Pull error events out of a failure body, which may or may not be a
/// structured envelope.
fn salvage_error_events(body: &str) -> Vec<Event> {
    match serde_json::from_str::<RestResponse<serde_json::Value>>(body) {
        Ok(envelope) => {
            let events: Vec<Event> = envelope.error_events().into_iter().cloned().collect();
            if events.is_empty() {
                vec![Event::error(snippet(body))]
            } else {
                events
            }
        }
        Err(_) => vec![Event::error(snippet(body))],
    }
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(ERROR_BODY_SNIPPET).collect()
}
