//! Shared HTTP plumbing for the resource clients.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use finpanel_shared::{ApiError, ApiResult, ClientConfig, Session};

use crate::envelope::Payload;

/// Error body shape used by the backend on non-2xx answers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "mensagem", default)]
    message: Option<String>,
}

/// Joins the configured base URL with an absolute API path.
fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn map_transport_error(error: &reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(error.to_string())
    }
}

/// The shared transport under every resource client.
///
/// Injects the session's bearer token into each request, extracts the
/// server's `mensagem` from failures, and tears the session down on 401.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
    config: ClientConfig,
}

impl ApiClient {
    /// Builds a client from configuration and a session context.
    pub fn new(config: ClientConfig, session: Arc<Session>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.backend.request_timeout())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.backend.base_url.clone(),
            session,
            config,
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The session context this client authenticates with.
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Starts a request with the bearer token attached, when present.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, join_url(&self.base_url, path));
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Sends the request and maps transport and status failures.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("401 from server, invalidating session");
            self.session.invalidate();
            return Err(ApiError::Unauthorized { message });
        }

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Executes and decodes a payload in either shape, unwrapping it.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        self.fetch_payload(builder).await?.into_result()
    }

    /// Executes and decodes a list payload; a data-less envelope is empty.
    pub(crate) async fn fetch_list<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> ApiResult<Vec<T>> {
        Ok(self.fetch_payload::<Vec<T>>(builder).await?.into_list())
    }

    /// Executes and decodes the raw [`Payload`].
    pub(crate) async fn fetch_payload<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> ApiResult<Payload<T>> {
        let response = self.execute(builder).await?;
        response
            .json::<Payload<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Executes and decodes a bare (never enveloped) body.
    pub(crate) async fn fetch_bare<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> ApiResult<T> {
        let response = self.execute(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Executes and returns the raw body, for blob downloads.
    pub(crate) async fn fetch_bytes(&self, builder: RequestBuilder) -> ApiResult<Bytes> {
        let response = self.execute(builder).await?;
        response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Executes and discards the body.
    pub(crate) async fn fetch_unit(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.execute(builder).await.map(|_| ())
    }

    /// Per-call timeout override, for the slow assistant endpoints.
    pub(crate) fn with_timeout(builder: RequestBuilder, timeout: Duration) -> RequestBuilder {
        builder.timeout(timeout)
    }
}
