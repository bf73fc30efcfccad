//! Process-wide style caching with arc-swap for lock-free reads.

use crate::schema::{StyleConfig, StyleOverrides};
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use radiofig_common::Result;
use std::sync::Arc;

/// Thread-safe style cache using arc-swap for lock-free reads.
pub struct StyleCache {
    style: ArcSwap<StyleConfig>,
}

impl StyleCache {
    /// Creates a new cache holding the given style.
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style: ArcSwap::from_pointee(style),
        }
    }

    /// Gets the current style.
    pub fn get(&self) -> Arc<StyleConfig> {
        self.style.load_full()
    }

    /// Merges `overrides` over the built-in defaults and stores the result.
    ///
    /// On error the cached style is left untouched.
    pub fn apply(&self, overrides: Option<&StyleOverrides>) -> Result<Arc<StyleConfig>> {
        let style = match overrides {
            Some(overrides) => StyleConfig::with_overrides(overrides)?,
            None => StyleConfig::default(),
        };
        let style = Arc::new(style);
        self.style.store(Arc::clone(&style));
        Ok(style)
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

static GLOBAL_STYLE: Lazy<StyleCache> = Lazy::new(StyleCache::default);

/// Applies defaults plus `overrides` as the process-wide style and returns it.
pub fn apply_style(overrides: Option<&StyleOverrides>) -> Result<Arc<StyleConfig>> {
    let style = GLOBAL_STYLE.apply(overrides)?;
    tracing::debug!(?style, "Applied plotting style");
    Ok(style)
}

/// The process-wide style currently in effect.
pub fn current_style() -> Arc<StyleConfig> {
    GLOBAL_STYLE.get()
}
