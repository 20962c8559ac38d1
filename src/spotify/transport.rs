use std::{future::Future, time::Duration};

use reqwest::{Client, StatusCode, header::HeaderMap};
use serde_json::Value;

use crate::error::Result;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Status and decoded JSON body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        HttpResponse { status, body }
    }

    /// `true` for any status in 200..=299.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// The "perform HTTP request" capability the catalog client is built on.
///
/// Implementations return `Ok` for every response that arrived, whatever its
/// status; `Err` is reserved for exchanges that never completed. Timeouts and
/// connection reuse are the implementation's business.
pub trait Transport: Send + Sync {
    /// POSTs `form` as `application/x-www-form-urlencoded`.
    fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        headers: HeaderMap,
    ) -> impl Future<Output = Result<HttpResponse>> + Send;

    fn get(&self, url: &str, headers: HeaderMap)
    -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// [`Transport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Builds the client, applying `timeout` to every request when given.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(ReqwestTransport {
            client: builder.build()?,
        })
    }
}

impl Transport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        headers: HeaderMap,
    ) -> Result<HttpResponse> {
        let res = self
            .client
            .post(url)
            .headers(headers)
            .form(form)
            .send()
            .await?;
        read_response(res).await
    }

    async fn get(&self, url: &str, headers: HeaderMap) -> Result<HttpResponse> {
        let res = self.client.get(url).headers(headers).send().await?;
        read_response(res).await
    }
}

async fn read_response(res: reqwest::Response) -> Result<HttpResponse> {
    let status = res.status();
    let text = res.text().await?;

    let body = if text.trim().is_empty() {
        Value::Null
    } else if status.is_success() {
        serde_json::from_str(&text)?
    } else {
        // error bodies are informational only and may not be JSON at all
        serde_json::from_str(&text).unwrap_or(Value::String(text))
    };

    Ok(HttpResponse { status, body })
}
