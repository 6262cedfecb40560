//! Shared configuration storage.
//!
//! Holds the loaded config plus the path it came from, so the theme toggle
//! can write the preference back without re-resolving anything.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::types::{Config, ThemeMode};

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Update the stored theme and persist it.
    ///
    /// Losing the preference is not worth interrupting the session over, so
    /// a failed write is logged and otherwise ignored.
    pub fn set_theme(&self, theme: ThemeMode) {
        let config = {
            let mut guard = self.inner.write().expect("config lock poisoned");
            guard.theme = theme;
            guard.clone()
        };

        if let Err(err) = config.save_to(&self.path) {
            tracing::warn!(%err, "failed to persist theme preference");
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
