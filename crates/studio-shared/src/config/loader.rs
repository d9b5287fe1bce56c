//! Settings discovery and persistence.
//!
//! Settings come from an optional TOML file layered with `PW_STUDIO__*`
//! environment variables (`PW_STUDIO__LISTER__PAGE_SIZE=25`). Loading never
//! fails from the caller's point of view: a missing or malformed source is
//! logged and replaced with defaults.

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};

use super::StudioSettings;
use crate::errors::SettingsError;
use crate::host::ConfigStore;

/// Environment variable prefix for settings overrides.
pub const ENV_PREFIX: &str = "PW_STUDIO";

const ENV_SEPARATOR: &str = "__";
const LIST_KEYS: [&str; 2] = ["template_regions", "lister.templates"];

fn environment() -> Environment {
    let env = Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
        .list_separator(",");
    LIST_KEYS
        .iter()
        .fold(env, |env, key| env.with_list_parse_key(key))
}

fn build(path: Option<&Path>, env: Option<Environment>) -> Result<StudioSettings, SettingsError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    }
    if let Some(env) = env {
        builder = builder.add_source(env);
    }
    Ok(builder.build()?.try_deserialize::<StudioSettings>()?)
}

/// Load settings from `path` (if given) plus environment overrides.
///
/// The result is normalized: page size clamped, configs of disabled
/// templates dropped.
pub fn try_load_settings(path: Option<&Path>) -> Result<StudioSettings, SettingsError> {
    build(path, Some(environment())).map(|settings| settings.normalized())
}

/// Load settings, falling back to defaults on any error.
pub fn load_settings(path: Option<&Path>) -> StudioSettings {
    match try_load_settings(path) {
        Ok(settings) => {
            tracing::debug!(?path, "Loaded studio settings");
            settings
        }
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to load studio settings, using defaults");
            StudioSettings::default()
        }
    }
}

/// Settings persisted as a TOML file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    /// Reads the file only; environment overrides are not persisted back.
    fn load(&self) -> StudioSettings {
        match build(Some(&self.path), None) {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read settings file, using defaults");
                StudioSettings::default()
            }
        }
    }

    fn save(&mut self, settings: &StudioSettings) -> Result<(), SettingsError> {
        let contents = toml::to_string_pretty(&settings.normalized())?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, contents).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "Saved studio settings");
        Ok(())
    }
}

/// Settings held in memory, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    settings: StudioSettings,
}

impl MemoryConfigStore {
    pub fn new(settings: StudioSettings) -> Self {
        Self { settings }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> StudioSettings {
        self.settings.clone()
    }

    fn save(&mut self, settings: &StudioSettings) -> Result<(), SettingsError> {
        self.settings = settings.normalized();
        Ok(())
    }
}
