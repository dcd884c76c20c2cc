// Configuration module entry point
// Loads send defaults and logging settings from file and environment

mod types;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File, FileFormat};

// Re-export public types
pub use types::{Config, LogLevel, LoggingConfig, SendConfig};

/// Default config file name (extension optional)
const DEFAULT_CONFIG_PATH: &str = "hyper-send";

impl Config {
    /// Load configuration from the default file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path (extension optional)
    ///
    /// A missing file is not an error; defaults and environment variables such
    /// as `HYPER_SEND__SEND__SKIP_ETAG=true` still apply.
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        Self::build(
            config::Config::builder().add_source(File::with_name(config_path).required(false)),
        )
    }

    /// Parse configuration from TOML text, ignoring the environment
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::with_defaults(
            config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )?
        .build()?
        .try_deserialize()
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        Self::with_defaults(
            builder.add_source(
                Environment::with_prefix("HYPER_SEND")
                    .separator("__")
                    .try_parsing(true),
            ),
        )?
        .build()?
        .try_deserialize()
    }

    fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("send.json_spaces", 0)?
            .set_default("send.skip_etag", false)?
            .set_default("send.etag_match", "every")?
            .set_default("logging.level", "warn")?
            .set_default("logging.send_log", false)?
            .set_default("logging.send_log_format", "common")
    }
}
