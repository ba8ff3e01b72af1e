//! User resource wrapper (`users` category)
//!
//! Login is the one endpoint called without a token; it resolves to the
//! token pair used by every subsequent request.

use serde::Serialize;

use crate::catalog::models::{AuthenticationResponse, User};
use crate::error::{ClientError, ClientResult};
use crate::rest::{QueryOptions, QueryParams, RestClient, RestResponse};

const CATEGORY: &str = "users";

/// Body for `users/login`: either user+password or a refresh token.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Resource wrapper for the `users` web services.
pub struct UserClient<'a> {
    rest: &'a RestClient,
}

impl<'a> UserClient<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// POST `/users/login` with user and password.
    pub async fn login(&self, user: &str, password: &str) -> ClientResult<AuthenticationResponse> {
        let body = LoginParams {
            user: Some(user.to_string()),
            password: Some(password.to_string()),
            refresh_token: None,
        };
        self.send_login(&body).await
    }

    /// POST `/users/login` with a refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> ClientResult<AuthenticationResponse> {
        let body = LoginParams {
            user: None,
            password: None,
            refresh_token: Some(refresh_token.to_string()),
        };
        self.send_login(&body).await
    }

    async fn send_login(&self, body: &LoginParams) -> ClientResult<AuthenticationResponse> {
        let response: RestResponse<AuthenticationResponse> = self
            .rest
            .post(CATEGORY, &[], "login", QueryParams::new(), body)
            .await?;
        response
            .into_first_result()
            .ok_or_else(|| ClientError::EmptyResponse {
                endpoint: format!("{CATEGORY}/login"),
            })
    }

    /// GET `/users/{user}/info`.
    pub async fn info(&self, user: &str, options: &QueryOptions) -> ClientResult<RestResponse<User>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.rest.get(CATEGORY, &[user], "info", params).await
    }
}
