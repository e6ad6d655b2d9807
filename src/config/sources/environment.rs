//! Environment variable source: BOTPROBE_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses BOTPROBE_ prefix and __ as separator for nested keys.
///
/// Values are kept as strings: numeric agent ids must not be reparsed as numbers.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("BOTPROBE")
            .prefix_separator("_")
            .separator("__"),
    );
    Ok(builder)
}
