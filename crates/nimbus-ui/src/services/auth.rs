//! HTTP client for the authentication endpoints.

use crate::core::auth::{AuthError, AuthService};
use crate::models::{ChangePasswordRequest, ForgotPasswordRequest, ProblemDetails};
use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;

#[derive(Clone, Debug)]
pub(crate) struct AuthClient {
    pub base_url: String,
}

impl AuthClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AuthError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let resp = Request::post(&url)
            .json(body)
            .map_err(|err| AuthError::Request(err.to_string()))?
            .send()
            .await
            .map_err(|err| AuthError::Request(err.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        match resp.json::<ProblemDetails>().await {
            Ok(problem) if (400..500).contains(&status) => {
                Err(AuthError::Rejected(problem.message().to_string()))
            }
            Ok(problem) => Err(AuthError::Request(problem.message().to_string())),
            Err(_) => Err(AuthError::Request(format!("HTTP {status}"))),
        }
    }
}

#[async_trait(?Send)]
impl AuthService for AuthClient {
    async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        self.post(
            "/auth/forgot-password",
            &ForgotPasswordRequest {
                email: email.to_string(),
            },
        )
        .await
    }

    async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        self.post(
            "/auth/change-password",
            &ChangePasswordRequest {
                old_password: old_password.to_string(),
                new_password: new_password.to_string(),
            },
        )
        .await
    }
}
