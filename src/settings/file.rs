//! Settings file persistence.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Settings, SettingsError};

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let data = toml::to_string_pretty(settings)?;
    fs::write(path, data)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let settings: Settings = toml::from_str(&data)?;
    settings.check()?;
    debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/rulepass/settings.toml")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pass::{ClassRule, Preset};

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.toml");

        let settings = load(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let settings = Settings {
            count: 5,
            options: Preset::Secure.options(),
        };
        save(&settings, &path).unwrap();

        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "count = 3\n\n[options]\nlength = 20\nsymbols = { enabled = false }\n",
        )
        .unwrap();

        let settings = load(&path).unwrap();
        assert_eq!(settings.count, 3);
        assert_eq!(settings.options.length, 20);
        assert_eq!(settings.options.symbols, ClassRule::off());
        assert_eq!(settings.options.uppercase, ClassRule::on(1));
    }

    #[test]
    fn out_of_range_length_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        for length in [0i64, 257, 4_000_000_000_000] {
            fs::write(&path, format!("[options]\nlength = {length}\n")).unwrap();
            assert!(
                matches!(load(&path), Err(SettingsError::Invalid(_))),
                "length {length} accepted"
            );
        }

        fs::write(&path, "[options]\nlength = 256\n").unwrap();
        assert_eq!(load(&path).unwrap().options.length, 256);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "count = \"many\"").unwrap();

        assert!(matches!(load(&path), Err(SettingsError::Parse(_))));
    }
}
