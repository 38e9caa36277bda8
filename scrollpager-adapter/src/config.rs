use alloc::string::String;
use alloc::vec::Vec;

use scrollpager::{DEFAULT_PER_PAGE, DEFAULT_THRESHOLD, PagerOptions};

/// Package-level scroll-to-load defaults.
///
/// Typically deserialized from the host's configuration file (the `serde`
/// feature derives `Serialize`/`Deserialize` with these defaults); every field
/// can be overridden per collection via [`ScrollSettings`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollConfig {
    /// Whether scroll-triggered loading is available at all.
    pub enabled: bool,
    /// Records loaded per batch.
    pub per_page: u32,
    /// Distance from the scrollable boundary that triggers the next load.
    pub threshold: u64,
    /// Message displayed while a batch is loading. Presentation only.
    pub loading_text: String,
    /// Message displayed once all records are loaded. Presentation only.
    pub end_text: String,
    /// When true, controllers built from this config attach as soon as the
    /// listing view mounts; when false, the user toggles the feature manually.
    pub auto_enable: bool,
    /// Collection names where scroll-to-load is disabled regardless of
    /// `enabled`. Useful for collections with custom pagination requirements.
    pub excluded: Vec<String>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            per_page: DEFAULT_PER_PAGE,
            threshold: DEFAULT_THRESHOLD,
            loading_text: String::from("Loading more records..."),
            end_text: String::from("All records loaded"),
            auto_enable: true,
            excluded: Vec::new(),
        }
    }
}

impl ScrollConfig {
    /// Whether the feature is active for a collection: globally enabled and
    /// not on the exclusion list.
    pub fn is_enabled_for(&self, collection: &str) -> bool {
        self.enabled && !self.excluded.iter().any(|c| c == collection)
    }

    /// Builds pager options for a collection from this config.
    pub fn options_for<R>(&self, collection: &str) -> PagerOptions<R> {
        PagerOptions::new()
            .with_enabled(self.is_enabled_for(collection))
            .with_per_page(self.per_page)
            .with_threshold(self.threshold)
            .with_loading_text(self.loading_text.clone())
            .with_end_text(self.end_text.clone())
    }
}

/// Per-collection override surface.
///
/// Implement this on a marker type for a collection to customize its scroll
/// behaviour; the default methods fall through to the package config, so a
/// minimal implementation is just a name:
///
/// ```
/// use scrollpager_adapter::{ScrollConfig, ScrollSettings};
///
/// struct Users;
///
/// impl ScrollSettings for Users {
///     const NAME: &'static str = "users";
/// }
///
/// let config = ScrollConfig::default();
/// assert!(Users::enabled(&config));
/// assert_eq!(Users::per_page(&config), 25);
/// ```
pub trait ScrollSettings {
    /// Collection name, matched against [`ScrollConfig::excluded`].
    const NAME: &'static str;

    fn enabled(config: &ScrollConfig) -> bool {
        config.is_enabled_for(Self::NAME)
    }

    fn per_page(config: &ScrollConfig) -> u32 {
        config.per_page
    }

    fn threshold(config: &ScrollConfig) -> u64 {
        config.threshold
    }

    /// Resolves the effective pager options for this collection.
    fn pager_options<R>(config: &ScrollConfig) -> PagerOptions<R> {
        PagerOptions::new()
            .with_enabled(Self::enabled(config))
            .with_per_page(Self::per_page(config))
            .with_threshold(Self::threshold(config))
            .with_loading_text(config.loading_text.clone())
            .with_end_text(config.end_text.clone())
    }
}
