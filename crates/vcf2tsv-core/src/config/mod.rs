use std::path::Path;

use config::Config;
use serde::Deserialize;

use crate::error::CoreResult;

/// Name of the optional settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "vcf2tsv";

/// Prefix for environment overrides, e.g. `VCF2TSV_LOGGING__LEVEL=info`.
pub const ENV_PREFIX: &str = "VCF2TSV";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, usually a bare level such as `warn`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads settings from `vcf2tsv.{toml,json,yaml}` in the working directory
    /// and `VCF2TSV_` environment variables. Environment variables take
    /// precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::build(config::File::with_name(CONFIG_FILE_NAME).required(false))
    }

    /// ## Summary
    /// Loads settings from an explicit file instead of the working directory.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be parsed or deserialization fails.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        Self::build(config::File::from(path).required(false))
    }

    fn build<S>(file: S) -> CoreResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = LoggingConfig::default();

        let settings = Config::builder()
            .set_default("logging.level", defaults.level)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!(level = %settings.logging.level, "Settings loaded");

        Ok(settings)
    }
}

/// ## Summary
/// Loads `.env` (if any) and then the settings.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests;
