//! Built-in defaults every configuration build starts from.

use crate::config::{DEFAULT_BASE_URL, DEFAULT_BOT_ID, DEFAULT_TOKEN};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with defaults; later sources override these keys.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("api.token", DEFAULT_TOKEN)?
        .set_default("api.bot_id", DEFAULT_BOT_ID)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("logging.color", true)
}
