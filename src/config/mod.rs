use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// `null` disables the manifest.
    #[serde(default = "default_manifest")]
    pub manifest: Option<String>,
    #[serde(default = "default_manifest_prefix")]
    pub manifest_prefix: String,
    #[serde(default)]
    pub bundle: Option<String>,
    #[serde(default = "default_normalize_dates")]
    pub normalize_dates: bool,
}

fn default_input() -> String {
    "fuente_incidentes.xlsx".to_string()
}
fn default_output_dir() -> String {
    "data/incidents".to_string()
}
fn default_manifest() -> Option<String> {
    Some("manifest.json".to_string())
}
fn default_manifest_prefix() -> String {
    "incidents".to_string()
}
fn default_normalize_dates() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            sheet: None,
            output_dir: default_output_dir(),
            manifest: default_manifest(),
            manifest_prefix: default_manifest_prefix(),
            bundle: None,
            normalize_dates: default_normalize_dates(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rincidents`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rincidents")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rincidents.conf")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file yields the defaults; an unreadable or malformed one
    /// is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the default configuration file; refuses to replace an existing
    /// one unless `force` is set. Returns the path written.
    pub fn init(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        fs::write(&path, Config::default().to_yaml()?)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
