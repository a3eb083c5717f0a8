use std::sync::{Arc, OnceLock};

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .clone()
}

/// Initialize the global configuration
///
/// Loads configuration from `path` (usually "config.toml"); a missing file
/// falls back to defaults plus environment overrides. Calling it twice keeps
/// the first configuration.
pub fn init_config(path: &str) -> Result<Arc<StaticConfig>> {
    if let Some(config) = CONFIG.get() {
        return Ok(config.clone());
    }
    let loaded = Arc::new(StaticConfig::load(path)?);
    Ok(CONFIG.get_or_init(|| loaded).clone())
}
