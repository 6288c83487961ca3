use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use spendview_core::config::{General, Repository};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub repository: Repository,
}
impl Config {
    pub const FILENAME: &str = "spendview-config.toml";

    /// Loads the config at `path`, falling back to defaults if it doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found, using default config");
                Ok(Config::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, toml::to_string(self)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendview_core::config::RepositoryKind;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join(Config::FILENAME)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.general.small_category_threshold, 0.1);
        assert_eq!(config.repository.kind, RepositoryKind::Mock);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Config::FILENAME);
        std::fs::write(
            &path,
            "[general]\nnotice_rotation_secs = 2.5\n\n[repository]\nkind = \"local\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.general.notice_rotation_secs, 2.5);
        assert_eq!(config.general.tick_rate_ms, General::default().tick_rate_ms);
        assert_eq!(config.repository.kind, RepositoryKind::Local);
        assert_eq!(config.repository.root, Repository::default().root);

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Config::FILENAME);
        std::fs::write(&path, "[repository]\nkind = \"ftp\"\n").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
