//! Remote outline endpoint.
//!
//! The endpoint receives `POST {"topic": ..., "slides": N}` and answers with a
//! JSON array of `{"title": ..., "bullets": [...]}`. Every failure is reported
//! as [`RemoteOutline::Unavailable`] so callers can fall back to local
//! generation; nothing here returns an error once the adapter is built.

use super::SlideRecord;
use crate::common::Result;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Transport timeout used when the configuration names none.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a remote outline request.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteOutline {
    Generated(Vec<SlideRecord>),
    Unavailable(UnavailableReason),
}

/// Why the remote outline could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// No endpoint is configured
    NotConfigured,
    /// The crate was built without the `remote` feature
    Disabled,
    /// The endpoint answered with a non-success status
    Status(u16),
    /// Connecting, sending or reading failed, including timeouts
    Transport(String),
    /// The body was not an array of slide records
    Malformed(String),
    /// The body was an empty array
    Empty,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "no endpoint configured"),
            Self::Disabled => write!(f, "remote support not compiled in"),
            Self::Status(code) => write!(f, "endpoint returned status {code}"),
            Self::Transport(msg) => write!(f, "transport failure: {msg}"),
            Self::Malformed(msg) => write!(f, "malformed response: {msg}"),
            Self::Empty => write!(f, "endpoint returned no slides"),
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(not(feature = "remote"), allow(dead_code))]
struct OutlineRequest<'a> {
    topic: &'a str,
    slides: usize,
}

/// Client for the remote outline endpoint.
#[derive(Debug, Clone)]
pub struct RemoteOutlineAdapter {
    endpoint: Option<String>,
    timeout: Duration,
    #[cfg(feature = "remote")]
    client: reqwest::Client,
}

impl RemoteOutlineAdapter {
    /// Build an adapter. `None` disables the remote path.
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        #[cfg(feature = "remote")]
        let client = reqwest::Client::builder()
            .user_agent(concat!("humu-slides/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            endpoint,
            timeout,
            #[cfg(feature = "remote")]
            client,
        })
    }

    /// An adapter with no endpoint.
    pub fn disabled() -> Result<Self> {
        Self::new(None, DEFAULT_TIMEOUT)
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Request an outline, reporting any failure as `Unavailable`.
    pub async fn try_remote(&self, topic: &str, count: usize) -> RemoteOutline {
        let Some(endpoint) = self.endpoint.as_deref() else {
            debug!("no outline endpoint configured");
            return RemoteOutline::Unavailable(UnavailableReason::NotConfigured);
        };

        match self.request(endpoint, topic, count).await {
            Ok(slides) => {
                debug!(endpoint, slides = slides.len(), "remote outline accepted");
                RemoteOutline::Generated(slides)
            },
            Err(reason) => {
                warn!(endpoint, %reason, "remote outline unavailable, using local generation");
                RemoteOutline::Unavailable(reason)
            },
        }
    }

    #[cfg(feature = "remote")]
    async fn request(
        &self,
        endpoint: &str,
        topic: &str,
        count: usize,
    ) -> std::result::Result<Vec<SlideRecord>, UnavailableReason> {
        let response = self
            .client
            .post(endpoint)
            .json(&OutlineRequest {
                topic,
                slides: count,
            })
            .send()
            .await
            .map_err(|e| UnavailableReason::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UnavailableReason::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| UnavailableReason::Transport(e.to_string()))?;

        parse_outline(&body)
    }

    #[cfg(not(feature = "remote"))]
    async fn request(
        &self,
        _endpoint: &str,
        _topic: &str,
        _count: usize,
    ) -> std::result::Result<Vec<SlideRecord>, UnavailableReason> {
        Err(UnavailableReason::Disabled)
    }
}

/// Parse and normalize a response body.
#[cfg_attr(not(feature = "remote"), allow(dead_code))]
fn parse_outline(body: &str) -> std::result::Result<Vec<SlideRecord>, UnavailableReason> {
    let slides: Vec<SlideRecord> =
        serde_json::from_str(body).map_err(|e| UnavailableReason::Malformed(e.to_string()))?;

    if slides.is_empty() {
        return Err(UnavailableReason::Empty);
    }

    Ok(slides.into_iter().map(SlideRecord::normalized).collect())
}
