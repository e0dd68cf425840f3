//! REST access to the profile and organization endpoints.
//!
//! Browser (csr): real same-origin credentialed GETs via `gloo-net`, raced
//! against a `gloo-timers` timeout. Native builds: the transport reports
//! `FetchError::Unavailable` since these endpoints only exist behind the
//! page's own origin.
//!
//! ERROR HANDLING
//! ==============
//! The transport never interprets status codes. Any response that arrives,
//! 2xx or not, is returned as `Ok(HttpResponse)`; only transport-level
//! failures become `FetchError`. Status branching lives in `session`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use futures::future::LocalBoxFuture;
use thiserror::Error;

use super::types::HttpResponse;

/// Transport-level failure of a single GET.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("request timed out after {ms} ms")]
    Timeout { ms: u64 },
    #[error("could not decode response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl FetchError {
    /// Short user-facing text for the header's inline notice.
    pub fn notice(&self) -> String {
        match self {
            Self::Timeout { .. } => "The server is taking too long to respond. Please try again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Network(_) | Self::Unavailable => "Unable to reach the server. Check your connection.".to_owned(),
        }
    }
}

/// Network capability injected into the session flow.
///
/// Futures are local (`!Send`) because browser fetches live on the single
/// UI thread; the backend value itself is shareable so it can sit in Leptos
/// context.
pub trait Backend: Send + Sync {
    /// Same-origin, credentialed GET of `path`.
    fn get<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<HttpResponse, FetchError>>;
}

/// Production backend backed by the browser's `fetch`.
#[derive(Clone, Copy, Debug)]
pub struct BrowserBackend {
    timeout_ms: u64,
}

impl BrowserBackend {
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

impl Backend for BrowserBackend {
    fn get<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<HttpResponse, FetchError>> {
        Box::pin(async move {
            #[cfg(feature = "csr")]
            {
                use futures::future::{Either, select};

                let ms = self.timeout_ms;
                let request = Box::pin(send_get(path));
                let timer = gloo_timers::future::TimeoutFuture::new(timer_millis(ms));
                match select(request, timer).await {
                    Either::Left((result, _)) => result,
                    Either::Right(((), _)) => Err(FetchError::Timeout { ms }),
                }
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = path;
                Err(FetchError::Unavailable)
            }
        })
    }
}

#[cfg(feature = "csr")]
async fn send_get(path: &str) -> Result<HttpResponse, FetchError> {
    let resp = gloo_net::http::Request::get(path)
        .credentials(web_sys::RequestCredentials::SameOrigin)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

/// Clamp a millisecond timeout to what browser timers accept.
#[cfg(any(test, feature = "csr"))]
fn timer_millis(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}
