//! Runtime configuration for the pet editor.
//!
//! # Responsibility
//! - Hold database location, logging settings and locale strings.
//! - Resolve defaults, then environment overrides, then caller overrides.
//!
//! # Invariants
//! - A resolved config always carries a supported log level.
//! - `log_dir`, when set, is absolute.

use crate::logging::{default_log_level, normalize_level};
use crate::model::pet::Gender;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "PETSTORE_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "PETSTORE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PETSTORE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "petstore.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyValue(&'static str),
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValue(key) => write!(f, "`{key}` cannot be empty"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::RelativeLogDir(path) => {
                write!(f, "log dir must be an absolute path, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// Locale strings shown by the editor.
///
/// The gender labels double as the selection values the editor maps back to
/// [`Gender`], so they must match what the caller displays exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorStrings {
    pub gender_unknown: String,
    pub gender_male: String,
    pub gender_female: String,
    pub pet_saved: String,
    pub error_saving: String,
    pub title_new_pet: String,
    pub title_edit_pet: String,
}

impl Default for EditorStrings {
    fn default() -> Self {
        Self {
            gender_unknown: "Unknown".to_string(),
            gender_male: "Male".to_string(),
            gender_female: "Female".to_string(),
            pet_saved: "Pet saved".to_string(),
            error_saving: "Error with saving pet".to_string(),
            title_new_pet: "Add a Pet".to_string(),
            title_edit_pet: "Edit Pet".to_string(),
        }
    }
}

impl EditorStrings {
    /// Selector options in display-index order.
    pub fn gender_options(&self) -> [&str; 3] {
        [
            self.gender_unknown.as_str(),
            self.gender_male.as_str(),
            self.gender_female.as_str(),
        ]
    }

    /// Maps a selector label to a gender.
    ///
    /// Case-sensitive exact match against the male and female labels;
    /// everything else, including no selection, is `Unknown`.
    pub fn gender_from_label(&self, selection: Option<&str>) -> Gender {
        match selection {
            Some(label) if label == self.gender_male => Gender::Male,
            Some(label) if label == self.gender_female => Gender::Female,
            _ => Gender::Unknown,
        }
    }

    pub fn label_for(&self, gender: Gender) -> &str {
        self.gender_options()[gender.display_index()]
    }
}

/// Resolved editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub strings: EditorStrings,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            strings: EditorStrings::default(),
        }
    }
}

impl EditorConfig {
    /// Defaults overridden by `PETSTORE_*` environment variables, not yet
    /// validated.
    pub fn from_env_unchecked() -> Self {
        Self::from_lookup_unchecked(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`.
    ///
    /// Blank values are ignored, matching an unset variable. Callers layering
    /// further overrides on top must call [`EditorConfig::validate`] last.
    pub fn from_lookup_unchecked<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        if let Some(dir) = read(LOG_DIR_ENV) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        config
    }

    /// Checks invariants and normalizes the log level in place.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue("db_path"));
        }
        self.log_level = normalize_level(&self.log_level)
            .map_err(ConfigError::InvalidLogLevel)?
            .to_string();
        if let Some(dir) = self.log_dir.as_deref().filter(|dir| !dir.is_absolute()) {
            return Err(ConfigError::RelativeLogDir(dir.to_path_buf()));
        }
        Ok(())
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
