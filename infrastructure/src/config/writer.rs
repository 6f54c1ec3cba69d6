//! "Save as default" support: replaces the `[provider]` table of a TOML
//! file and leaves every other table as it was.

use super::file_config::FileProviderConfig;
use super::loader::ConfigLoader;
use advisor_application::ports::settings_store::{ConfigPersistError, SettingsStore};
use advisor_domain::ProviderSettings;
use std::path::{Path, PathBuf};
use tracing::info;

/// [`SettingsStore`] backed by a TOML file.
pub struct TomlSettingsStore {
    path: Option<PathBuf>,
}

impl TomlSettingsStore {
    /// Write to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Write to `explicit` when given, otherwise to the global config file.
    pub fn for_target(explicit: Option<&Path>) -> Self {
        Self {
            path: explicit
                .map(Path::to_path_buf)
                .or_else(ConfigLoader::global_config_path),
        }
    }

    fn existing(path: &Path) -> Result<toml::Table, ConfigPersistError> {
        if !path.exists() {
            return Ok(toml::Table::new());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigPersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse::<toml::Table>().map_err(|e| {
            ConfigPersistError::Serialize(format!(
                "existing file {} is not valid config: {}",
                path.display(),
                e
            ))
        })
    }
}

impl SettingsStore for TomlSettingsStore {
    fn save(&self, settings: &ProviderSettings) -> Result<PathBuf, ConfigPersistError> {
        let path = self.path.clone().ok_or(ConfigPersistError::NoConfigDir)?;

        let mut table = Self::existing(&path)?;
        let provider = toml::Value::try_from(FileProviderConfig::from(settings))
            .map_err(|e| ConfigPersistError::Serialize(e.to_string()))?;
        table.insert("provider".to_string(), provider);
        let text =
            toml::to_string_pretty(&table).map_err(|e| ConfigPersistError::Serialize(e.to_string()))?;

        let io_err = |source| ConfigPersistError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&path, text).map_err(io_err)?;

        info!("Saved {} settings to {}", settings.kind, path.display());
        Ok(path)
    }

    fn target(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::{Model, OutputFormat, ProviderKind};

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let store = TomlSettingsStore::new(&path);
        let settings = ProviderSettings::new(ProviderKind::OpenAi)
            .with_api_key("sk-saved")
            .with_model(Model::Gpt4);

        let written = store.save(&settings).unwrap();
        assert_eq!(written, path);

        let loaded = ConfigLoader::load_files(&[path]).unwrap();
        assert_eq!(loaded.provider_settings_with(|_| None), settings);
    }

    #[test]
    fn test_save_keeps_other_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[provider]\nkind = \"openai\"\nmodel = \"gpt-4\"\n\n[output]\nformat = \"markdown\"\ncolor = false\n",
        )
        .unwrap();

        let store = TomlSettingsStore::new(&path);
        store
            .save(&ProviderSettings::new(ProviderKind::Azure).with_api_key("azure-key"))
            .unwrap();

        let loaded = ConfigLoader::load_files(&[path]).unwrap();
        assert_eq!(loaded.provider.kind, ProviderKind::Azure);
        assert_eq!(loaded.provider.model.as_deref(), Some("gpt-35-turbo"));
        assert_eq!(loaded.output.format, Some(OutputFormat::Markdown));
        assert!(!loaded.output.color);
    }

    #[test]
    fn test_save_keeps_unknown_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[provider]\nkind = \"openai\"\n\n[team]\nowner = \"ops\"\n",
        )
        .unwrap();

        TomlSettingsStore::new(&path)
            .save(&ProviderSettings::new(ProviderKind::Azure))
            .unwrap();

        let table: toml::Table = std::fs::read_to_string(&path).unwrap().parse().unwrap();
        assert_eq!(table["team"]["owner"].as_str(), Some("ops"));
        assert_eq!(table["provider"]["kind"].as_str(), Some("azure"));
    }

    #[test]
    fn test_corrupt_existing_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let store = TomlSettingsStore::new(&path);
        let err = store.save(&ProviderSettings::default()).unwrap_err();
        assert!(matches!(err, ConfigPersistError::Serialize(_)));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "this is = = not toml"
        );
    }

    #[test]
    fn test_explicit_target_wins() {
        let store = TomlSettingsStore::for_target(Some(Path::new("custom.toml")));
        assert_eq!(store.target(), Some(PathBuf::from("custom.toml")));
    }
}
