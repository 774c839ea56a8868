use std::{
    ffi::OsString,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const SETTINGS_DIR: &str = "config";
const SETTINGS_FILE: &str = "config.json";

/// Reads and writes the preferences file.
///
/// Saves go through a sibling `*.tmp` file that is renamed over the target, so a
/// crash mid-write leaves the previous settings readable.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Keeps the preferences at `<base>/config/config.json`.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let settings_dir = base.join(SETTINGS_DIR);
        fs::create_dir_all(&settings_dir)?;
        Ok(Self::new(settings_dir.join(SETTINGS_FILE)))
    }

    /// Points at the platform configuration directory. Nothing is created until
    /// the first save.
    pub fn default_location() -> Self {
        let root = Config::default().resolve_data_root();
        Self::new(root.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the stored preferences, or defaults when nothing has been saved.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let raw = match fs::read_to_string(&self.config_path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default())
            }
            Err(err) => return Err(err.into()),
        };
        let config: Config =
            serde_json::from_str(&raw).map_err(|err| ConfigError::Serde(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let staging = staging_path(&self.config_path);
        let mut file = fs::File::create(&staging)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&staging, &self.config_path)?;
        Ok(())
    }

    /// Loads, applies `edit`, and saves. Nothing is written if the result is invalid.
    pub fn update<F>(&self, edit: F) -> Result<Config, ConfigError>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        edit(&mut config);
        self.save(&config)?;
        Ok(config)
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(SETTINGS_FILE));
    name.push(".tmp");
    path.with_file_name(name)
}
