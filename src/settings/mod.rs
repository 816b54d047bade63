//! Saved generation settings.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pass::GenerationOptions;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Passwords per run.
    pub count: usize,
    pub options: GenerationOptions,
}

impl Settings {
    /// Load from `path`, writing the defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    pub fn default_path() -> PathBuf {
        file::default_path()
    }

    /// Reject values the command line would not accept either.
    pub fn check(&self) -> Result<(), SettingsError> {
        let length = self.options.length;
        if !(GenerationOptions::MIN_LENGTH..=GenerationOptions::MAX_LENGTH).contains(&length) {
            return Err(SettingsError::Invalid(format!(
                "length {length} is outside {}..={}",
                GenerationOptions::MIN_LENGTH,
                GenerationOptions::MAX_LENGTH
            )));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: 1,
            options: GenerationOptions::default(),
        }
    }
}
