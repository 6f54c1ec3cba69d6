//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["crew-advisor.toml", ".crew-advisor.toml"];

/// Prefix for environment overrides (`CREW_ADVISOR_PROVIDER__MODEL=gpt-4`)
const ENV_PREFIX: &str = "CREW_ADVISOR_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CREW_ADVISOR_*` environment overrides
    /// 2. Explicit config path (if provided; must exist)
    /// 3. Project root: `./crew-advisor.toml` or `./.crew-advisor.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/crew-advisor/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut files = Vec::new();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            files.push(global_path);
        }
        if let Some(project_path) = Self::project_config_path() {
            files.push(project_path);
        }
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            files.push(path.to_path_buf());
        }

        Self::figment(&files)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Merge the given files over the defaults, later files winning.
    pub fn load_files(files: &[PathBuf]) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(files).extract().map_err(Box::new)
    }

    fn figment(files: &[PathBuf]) -> Figment {
        files.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// `$XDG_CONFIG_HOME/crew-advisor/config.toml` (or the platform
    /// equivalent).
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("crew-advisor").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used, one per line.
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            lines.push(format!("  [{:<7}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [{:<7}] Project: {}", "FOUND", path.display())),
            None => lines.push(format!(
                "  [{:<7}] Project: ./{} or ./{}",
                "", PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            lines.push(format!("  [{:<7}] Global:  {}", mark, path.display()));
        }

        lines.push(format!("  [{:<7}] Default: built-in defaults", ""));
        lines
    }
}
