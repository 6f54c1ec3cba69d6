//! Configuration file loading and saving for crew-advisor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CREW_ADVISOR_*` environment overrides
//! 2. `--config <path>` specified file
//! 3. Project root: `./crew-advisor.toml` or `./.crew-advisor.toml`
//! 4. Global: `$XDG_CONFIG_HOME/crew-advisor/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod writer;

pub use file_config::{
    AZURE_ENDPOINT_ENV, ConfigValidationError, FileConfig, FileOutputConfig, FileProviderConfig,
};
pub use loader::ConfigLoader;
pub use writer::TomlSettingsStore;
