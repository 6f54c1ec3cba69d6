//! JSON download of a recommendation

use super::formatter::AdviceFormatter;
use advisor_domain::AdviceRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used when `/export` is given no path
pub const DEFAULT_DOWNLOAD_NAME: &str = "crewai_recommendations.json";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to serialize recommendation: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Indented (2-space) JSON with keys in record order.
pub fn to_json_bytes(record: &AdviceRecord) -> Result<Vec<u8>, ExportError> {
    let mut bytes = serde_json::to_vec_pretty(record)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write the download file and return the path written.
pub fn write_json(record: &AdviceRecord, path: &Path) -> Result<PathBuf, ExportError> {
    let bytes = to_json_bytes(record)?;
    std::fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

/// Prints the download format.
pub struct JsonFormatter;

impl AdviceFormatter for JsonFormatter {
    fn format(&self, record: &AdviceRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }
}
