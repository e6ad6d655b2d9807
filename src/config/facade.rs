//! ConfigLoader facade delegating to merge service.

use super::merge::service::{ConfigOverrides, MergeService};
use super::ProbeConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, environment, and overrides.
    pub fn load(overrides: &ConfigOverrides) -> Result<ProbeConfig, ApiError> {
        let config = MergeService::load(overrides)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file instead of the global one.
    pub fn load_from_file(path: &Path, overrides: &ConfigOverrides) -> Result<ProbeConfig, ApiError> {
        let config = MergeService::load_from_file(path, overrides)?;
        config.validate()?;
        Ok(config)
    }
}
