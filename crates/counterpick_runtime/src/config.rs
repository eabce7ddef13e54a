//! Session configuration.

use std::sync::Arc;

use counterpick_foundation::Catalog;
use counterpick_storage::Labels;

/// Storage key the roster document is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "pokemon-unite-counter-pick";

/// Query parameter carrying a shared roster.
pub const DEFAULT_SHARE_PARAM: &str = "d";

/// Page URL share links are built on when none was opened.
pub const DEFAULT_BASE_URL: &str = "http://localhost/";

/// Settings for a [`Session`](crate::Session).
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Key used with the key-value store.
    pub storage_key: String,
    /// Query parameter name for share links.
    pub share_param: String,
    /// Base URL for share links.
    pub base_url: String,
    /// Default names for sets and slots.
    pub labels: Arc<Labels>,
    /// Entity catalog.
    pub catalog: Arc<Catalog>,
}

impl SessionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the share query parameter.
    #[must_use]
    pub fn with_share_param(mut self, param: impl Into<String>) -> Self {
        self.share_param = param.into();
        self
    }

    /// Sets the base URL for share links.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the label defaults.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = Arc::new(labels);
        self
    }

    /// Sets the catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            share_param: DEFAULT_SHARE_PARAM.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            labels: Arc::new(Labels::default()),
            catalog: Arc::new(Catalog::builtin()),
        }
    }
}
