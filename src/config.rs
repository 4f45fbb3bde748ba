use serde::{Deserialize, Serialize};

use crate::services::ledger::LineItem;

/// Id of the inline `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub toast: ToastConfig,
    pub ledger: LedgerConfig,
}

/// Durable storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Local storage key holding the JSON array of profile names.
    pub profiles_key: String,
}

/// Notification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Delay in milliseconds before a shown notification is hidden.
    pub duration_ms: u32,
}

/// Line-item table configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Demonstration rows added on every page load.
    pub seed_items: Vec<LineItem>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            toast: ToastConfig::default(),
            ledger: LedgerConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            profiles_key: "profiles".to_string(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { duration_ms: 3000 }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            seed_items: vec![
                LineItem::new("Item 1", 2.0, 50.0),
                LineItem::new("Item 2", 3.0, 30.0),
                LineItem::new("Item 3", 5.0, 20.0),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from the page's inline `#app-config` element.
    /// Returns `Default` if the element is missing or unparseable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());
        Self::from_json_or_default(raw.as_deref())
    }

    /// Parse a JSON override document, falling back to defaults.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => match serde_json::from_str(raw) {
                Ok(config) => {
                    log::info!("Loaded config from #{CONFIG_ELEMENT_ID}");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse #{CONFIG_ELEMENT_ID}: {e}; using defaults");
                    Self::default()
                }
            },
            None => {
                log::debug!("No #{CONFIG_ELEMENT_ID} element; using defaults");
                Self::default()
            }
        }
    }
}
