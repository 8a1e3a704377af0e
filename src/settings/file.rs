//! Settings file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Settings, SettingsError};

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(settings)?)?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(path)?;
    let settings = toml::from_str(&contents)?;
    log::debug!("loaded settings from {}", path.display());
    Ok(settings)
}

pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("strongpass")
        .join("settings.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharacterCategory, Coverage};
    use crate::strength::Heuristic;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.generation = settings
            .generation
            .with_length(24)
            .with_category(CharacterCategory::Symbols, false)
            .with_exclude_similar(true)
            .with_coverage(Coverage::BestEffort);
        settings.heuristic = Heuristic::Linear;
        settings.number_of_passwords = 3;

        save(&settings, &path).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[generation]\nlength = 20\ncategories = [\"digits\"]\n").unwrap();

        let settings = load(&path).unwrap();
        assert_eq!(settings.generation.length, 20);
        assert_eq!(settings.generation.pool().to_string(), "0123456789");
        assert_eq!(settings.number_of_passwords, 1);
        assert!(!settings.generation.exclude_repeats);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "generation = 5").unwrap();
        assert!(matches!(load(&path), Err(SettingsError::Parse(_))));
    }
}
