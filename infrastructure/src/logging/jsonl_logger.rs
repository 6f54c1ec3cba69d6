//! JSONL file writer for advice conversation events.
//!
//! Each [`ConversationEvent`] becomes one JSON line: the payload's fields
//! plus `type` and `timestamp`. Runs append to the same file, so one log can
//! cover several sessions.

use advisor_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Conversation logger writing one JSON object per line.
///
/// Flushed after every event and on `Drop`.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating it and its parent directories.
    ///
    /// Returns `None` (after a warning) if the file cannot be opened; the
    /// caller then runs without a conversation log.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create conversation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open conversation log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_record(event: ConversationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let mut map = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(line) = serde_json::to_string(&Self::to_record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
