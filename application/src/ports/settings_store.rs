//! Settings persistence port
//!
//! "Save as default" writes the session's provider settings somewhere they
//! will be picked up on the next start. The file format and location belong
//! to the infrastructure layer.

use advisor_domain::ProviderSettings;
use std::path::PathBuf;
use thiserror::Error;

/// Writing the default settings failed. Session settings stay usable.
#[derive(Error, Debug)]
pub enum ConfigPersistError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    #[error("failed to serialize settings: {0}")]
    Serialize(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait SettingsStore: Send + Sync {
    /// Persist `settings` and return the path written.
    fn save(&self, settings: &ProviderSettings) -> Result<PathBuf, ConfigPersistError>;

    /// Where [`save`](Self::save) would write, if known
    fn target(&self) -> Option<PathBuf>;
}
