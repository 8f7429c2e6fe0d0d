// Welcome sound playback through an external player command

use crate::error::{GuardianError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

pub struct WelcomeSound {
    path: PathBuf,
    player: String,
}

impl WelcomeSound {
    pub fn new(path: impl Into<PathBuf>, player: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            player: player.into(),
        }
    }

    /// Play the sound to completion. Output from the player is discarded.
    pub fn play(&self) -> Result<()> {
        if !self.path.is_file() {
            warn!(path = %self.path.display(), "welcome sound missing");
            return Err(GuardianError::AudioMissing(self.path.clone()));
        }

        debug!(player = %self.player, path = %self.path.display(), "playing welcome sound");

        let status = Command::new(&self.player)
            .arg(&self.path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| GuardianError::Audio(format!("could not run '{}': {}", self.player, e)))?;

        if !status.success() {
            return Err(GuardianError::Audio(format!(
                "'{}' exited with {}",
                self.player, status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file() {
        let sound = WelcomeSound::new("/nonexistent/welcome.wav", "true");
        let err = sound.play().unwrap_err();
        assert!(matches!(err, GuardianError::AudioMissing(_)));
        assert!(err.user_message().starts_with("Audio file not found:"));
    }

    #[test]
    fn test_missing_player() {
        let file = NamedTempFile::new().unwrap();
        let sound = WelcomeSound::new(file.path(), "cyberguardian-no-such-player");
        let err = sound.play().unwrap_err();
        assert!(matches!(err, GuardianError::Audio(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_player_exit_status() {
        let file = NamedTempFile::new().unwrap();

        assert!(WelcomeSound::new(file.path(), "true").play().is_ok());

        let err = WelcomeSound::new(file.path(), "false").play().unwrap_err();
        assert!(matches!(err, GuardianError::Audio(_)));
    }
}
