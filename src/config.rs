/// Startup configuration
///
/// Presentation and startup knobs. Everything has a default; an optional
/// JSON file at `~/.cyberguardian/config.json` can override any field.
/// Nothing is ever written back.

use crate::error::{GuardianError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = ".cyberguardian";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Per-character delay for typed assistant lines
    pub typing_delay_ms: u64,
    /// Per-character delay for the welcome box
    pub banner_delay_ms: u64,
    /// WAV file played once at startup
    pub welcome_sound: Option<PathBuf>,
    /// External program used to play the welcome sound
    pub sound_player: String,
    /// Fixed seed for tip selection
    pub rng_seed: Option<u64>,
    pub color: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 30,
            banner_delay_ms: 15,
            welcome_sound: None,
            sound_player: "aplay".to_string(),
            rng_seed: None,
            color: true,
        }
    }
}

impl ChatConfig {
    /// Load from the default location, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: ChatConfig = serde_json::from_str(&raw)?;
        config.validate()?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `~/.cyberguardian/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    fn validate(&self) -> Result<()> {
        if self.sound_player.trim().is_empty() {
            return Err(GuardianError::Config(
                "sound_player must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ChatConfig::load_from(temp.path().join("nope.json")).unwrap();
        assert_eq!(config, ChatConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "typing_delay_ms": 0, "rng_seed": 7 }"#).unwrap();

        let config = ChatConfig::load_from(&path).unwrap();
        assert_eq!(config.typing_delay_ms, 0);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.banner_delay_ms, 15);
        assert!(config.color);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        match ChatConfig::load_from(&path) {
            Err(GuardianError::Serialization(_)) => {}
            other => panic!("Expected Serialization error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_player_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "sound_player": "  " }"#).unwrap();

        match ChatConfig::load_from(&path) {
            Err(GuardianError::Config(_)) => {}
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
