mod errors;
mod logging;
mod resolver;
mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, DEFAULT_MAX_RETRIES, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
