//! MergeService: orchestrates sources, applies merge policy, deserializes to ProbeConfig.

use crate::config::sources::{environment, global_file};
use crate::config::ProbeConfig;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::{Path, PathBuf};

use super::merge_policy;

/// Values supplied on the command line; these win over every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub bot_id: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_output: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ConfigOverrides {
    fn add_to_builder(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_override_option("api.base_url", self.base_url.clone())?
            .set_override_option("api.token", self.token.clone())?
            .set_override_option("api.bot_id", self.bot_id.clone())?
            .set_override_option(
                "api.timeout_secs",
                self.timeout_secs.and_then(|t| i64::try_from(t).ok()),
            )?
            .set_override_option("logging.level", self.log_level.clone())?
            .set_override_option("logging.format", self.log_format.clone())?
            .set_override_option("logging.output", self.log_output.clone())?
            .set_override_option(
                "logging.file",
                self.log_file
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
            )
    }
}

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: defaults (lowest) -> global file -> environment -> overrides (highest).
    pub fn load(overrides: &ConfigOverrides) -> Result<ProbeConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder)?;
        let builder = overrides.add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment and override overlay.
    pub fn load_from_file(
        path: &Path,
        overrides: &ConfigOverrides,
    ) -> Result<ProbeConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(true),
        );
        let builder = environment::add_to_builder(builder)?;
        let builder = overrides.add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
