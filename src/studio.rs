//! Generate flow.
//!
//! Ties the pieces together: apply the theme, validate the topic, clamp the
//! count, try the remote endpoint and fall back to local generation, then load
//! the result into the session.

use crate::common::Result;
use crate::config::Config;
use crate::outline::{self, RemoteOutline, RemoteOutlineAdapter};
use crate::session::EditingSession;
use std::path::PathBuf;
use tracing::{info, instrument};

/// A request to (re)generate the outline.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub topic: String,
    /// Requested count before clamping; `None` uses the configured default
    pub slide_count: Option<i64>,
    /// Theme key; `None` keeps the configured default
    pub theme: Option<String>,
}

impl GenerateRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            slide_count: None,
            theme: None,
        }
    }

    pub fn with_slide_count(mut self, count: i64) -> Self {
        self.slide_count = Some(count);
        self
    }

    pub fn with_theme(mut self, theme: &str) -> Self {
        self.theme = Some(theme.to_string());
        self
    }
}

/// Where the current outline came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineSource {
    Remote,
    Local,
}

/// Outline generation and export with one configuration.
#[derive(Debug, Clone)]
pub struct Studio {
    adapter: RemoteOutlineAdapter,
    default_slide_count: i64,
    default_theme: String,
    output_dir: PathBuf,
}

impl Studio {
    /// Build from a validated configuration.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            adapter: config.remote_adapter()?,
            default_slide_count: config.defaults.slide_count,
            default_theme: config.defaults.theme.clone(),
            output_dir: config.export.output_dir.clone(),
        })
    }

    pub fn adapter(&self) -> &RemoteOutlineAdapter {
        &self.adapter
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// Generate an outline into `session`.
    ///
    /// The theme is applied before the topic is checked, so it sticks even
    /// when the request is rejected for an empty topic. On success the
    /// session's outline is replaced and the first slide selected.
    #[instrument(skip(self, session), fields(topic = %request.topic))]
    pub async fn generate(
        &self,
        session: &mut EditingSession,
        request: &GenerateRequest,
    ) -> Result<OutlineSource> {
        session.set_theme(request.theme.as_deref().unwrap_or(&self.default_theme));

        let topic = outline::validate_topic(&request.topic)?;
        let count =
            outline::clamp_slide_count(Some(request.slide_count.unwrap_or(self.default_slide_count)));

        let (slides, source) = match self.adapter.try_remote(topic, count).await {
            RemoteOutline::Generated(slides) => (slides, OutlineSource::Remote),
            RemoteOutline::Unavailable(_) => (outline::generate(topic, count), OutlineSource::Local),
        };

        info!(slides = slides.len(), ?source, theme = session.theme_key(), "outline generated");
        session.set_outline(slides);
        Ok(source)
    }

    /// Export the session into the configured output directory.
    pub fn export(&self, session: &EditingSession) -> Result<PathBuf> {
        crate::export::export_to_dir(session, &self.output_dir)
    }
}
