//! Configuration.
//!
//! Loaded from YAML. Every field is optional; missing fields take their
//! defaults. Command-line flags and environment variables are applied on top
//! with the `with_*` setters.
//!
//! ```yaml
//! remote:
//!   endpoint: https://example.com/api/outline
//!   timeout_secs: 20
//! defaults:
//!   slide_count: 8
//!   theme: mint
//! export:
//!   output_dir: decks
//! ```

use crate::common::{Error, Result};
use crate::outline::remote::{DEFAULT_TIMEOUT, RemoteOutlineAdapter};
use crate::outline::{DEFAULT_SLIDE_COUNT, MAX_SLIDE_COUNT, MIN_SLIDE_COUNT};
use crate::theme::DEFAULT_THEME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Remote outline endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Endpoint URL; no remote call is made when absent
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Transport timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Defaults for generate requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_slide_count")]
    pub slide_count: i64,
    #[serde(default = "default_theme")]
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_slide_count() -> i64 {
    DEFAULT_SLIDE_COUNT as i64
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            slide_count: default_slide_count(),
            theme: default_theme(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if endpoint.is_some() {
            self.remote.endpoint = endpoint;
        }
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.remote.timeout_secs = secs;
        self
    }

    pub fn with_slide_count(mut self, count: i64) -> Self {
        self.defaults.slide_count = count;
        self
    }

    pub fn with_theme(mut self, theme: &str) -> Self {
        self.defaults.theme = theme.to_string();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export.output_dir = dir.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.remote.timeout_secs)
    }

    /// Check the endpoint URL and timeout.
    ///
    /// Slide counts outside the allowed range are clamped rather than rejected.
    pub fn validate(&self) -> Result<()> {
        if self.remote.timeout_secs == 0 {
            return Err(Error::Config("remote.timeout_secs must be positive".to_string()));
        }

        if let Some(ref endpoint) = self.remote.endpoint {
            validate_endpoint(endpoint)?;
        }

        if !(MIN_SLIDE_COUNT as i64..=MAX_SLIDE_COUNT as i64).contains(&self.defaults.slide_count) {
            debug!(
                slide_count = self.defaults.slide_count,
                "default slide count will be clamped"
            );
        }

        Ok(())
    }

    /// Build the remote adapter described by this configuration.
    pub fn remote_adapter(&self) -> Result<RemoteOutlineAdapter> {
        RemoteOutlineAdapter::new(self.remote.endpoint.clone(), self.timeout())
    }
}

#[cfg(feature = "remote")]
fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = reqwest::Url::parse(endpoint.trim())
        .map_err(|e| Error::Config(format!("invalid endpoint {endpoint:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::Config(format!(
            "invalid endpoint {endpoint:?}: unsupported scheme {other}"
        ))),
    }
}

#[cfg(not(feature = "remote"))]
fn validate_endpoint(endpoint: &str) -> Result<()> {
    let endpoint = endpoint.trim();
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::Config(format!("invalid endpoint {endpoint:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.remote.endpoint, None);
        assert_eq!(config.remote.timeout_secs, 30);
        assert_eq!(config.defaults.slide_count, 6);
        assert_eq!(config.defaults.theme, "modernBlue");
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("defaults:\n  theme: mint\n").unwrap();
        assert_eq!(config.defaults.theme, "mint");
        assert_eq!(config.defaults.slide_count, 6);
        assert_eq!(config.remote.timeout_secs, 30);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "remote:\n  endpoint: http://localhost:8080/outline\n  timeout_secs: 5\ndefaults:\n  slide_count: 9\n  theme: minimalDark\nexport:\n  output_dir: out\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.remote.endpoint.as_deref(), Some("http://localhost:8080/outline"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.defaults.slide_count, 9);
        assert_eq!(config.export.output_dir, PathBuf::from("out"));
        config.validate().unwrap();
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            Config::from_yaml("remote: [1, 2"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config::from_yaml("remote:\n  endpoint: http://a.example/x\n")
            .unwrap()
            .with_endpoint(Some("http://b.example/y".to_string()))
            .with_endpoint(None)
            .with_theme("mint");
        assert_eq!(config.remote.endpoint.as_deref(), Some("http://b.example/y"));
        assert_eq!(config.defaults.theme, "mint");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = Config::new().with_timeout_secs(0);
        assert!(matches!(zero.validate(), Err(Error::Config(_))));

        let bad_url = Config::new().with_endpoint(Some("not a url".to_string()));
        assert!(matches!(bad_url.validate(), Err(Error::Config(_))));

        let ftp = Config::new().with_endpoint(Some("ftp://example.com/".to_string()));
        assert!(matches!(ftp.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("humu.yaml");
        let config = Config::new().with_slide_count(12).with_output_dir("decks");
        std::fs::write(&path, config.to_yaml().unwrap()).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
        assert!(matches!(
            Config::load(dir.path().join("missing.yaml")),
            Err(Error::Config(_))
        ));
    }
}
