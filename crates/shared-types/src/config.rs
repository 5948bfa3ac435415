use serde::{Deserialize, Serialize};

/// Base URL used when neither `config.toml` nor the environment names one.
pub const DEFAULT_NUCLEUS_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for the citation service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NucleusSettings {
    /// Scheme and host (plus optional port) the endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for NucleusSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_NUCLEUS_BASE_URL.to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub nucleus: NucleusSettings,
}

impl AppConfig {
    /// Replace the configured base URL with `override_url` when it is set
    /// and non-blank. Trailing slashes are dropped so the endpoint path can
    /// be appended directly.
    pub fn with_base_url_override(mut self, override_url: Option<&str>) -> Self {
        if let Some(url) = override_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.nucleus.base_url = url.to_string();
        }
        self.nucleus.base_url = self.nucleus.base_url.trim_end_matches('/').to_string();
        self
    }
}
