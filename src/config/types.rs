use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::{ButtonVariant, CardVariant, ModalVariant, TableVariant, TabsVariant, Variant};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend the view layer talks to.
///
/// This crate never opens connections itself. The HTTP client that builds
/// the request futures handed to the dispatcher reads these settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API (e.g., "http://localhost:3000/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Where the logged-in session is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage file. Defaults to the platform data directory.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

/// Default presentational variants.
///
/// Values are variant keys. Unknown keys resolve to the variant's default
/// instead of failing the whole config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub button: Option<String>,
    #[serde(default)]
    pub card: Option<String>,
    #[serde(default)]
    pub modal: Option<String>,
    #[serde(default)]
    pub tabs: Option<String>,
    #[serde(default)]
    pub table: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout_seconds() -> u32 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ApiConfig {
    /// Request timeout for the view layer's HTTP client.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }
}

impl UiConfig {
    pub fn button_variant(&self) -> ButtonVariant {
        resolve(&self.button)
    }

    pub fn card_variant(&self) -> CardVariant {
        resolve(&self.card)
    }

    pub fn modal_variant(&self) -> ModalVariant {
        resolve(&self.modal)
    }

    pub fn tabs_variant(&self) -> TabsVariant {
        resolve(&self.tabs)
    }

    pub fn table_variant(&self) -> TableVariant {
        resolve(&self.table)
    }
}

fn resolve<V: Variant>(key: &Option<String>) -> V {
    key.as_deref().map(V::resolve).unwrap_or_default()
}
