/// Error types for cyberguardian
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for cyberguardian operations
#[derive(Error, Debug)]
pub enum GuardianError {
    /// I/O errors (terminal reads/writes, config file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Built-in pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Task command could not be turned into a task
    #[error("Invalid task: {0}")]
    InvalidTask(String),

    /// Reminder expression could not be understood
    #[error("Invalid reminder: {0}")]
    InvalidReminder(String),

    /// Welcome sound file does not exist
    #[error("Audio file not found: {}", .0.display())]
    AudioMissing(std::path::PathBuf),

    /// Welcome sound could not be played
    #[error("Audio error: {0}")]
    Audio(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for cyberguardian operations
pub type Result<T> = std::result::Result<T, GuardianError>;

/// Convert GuardianError to a user-friendly error message
impl GuardianError {
    pub fn user_message(&self) -> String {
        match self {
            GuardianError::Io(e) => {
                format!("Terminal or file error. Details: {}", e)
            }
            GuardianError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            GuardianError::Pattern(e) => {
                format!("Internal pattern error: {}", e)
            }
            GuardianError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            GuardianError::InvalidTask(_) => {
                "Please follow the format 'Add task - [Title]'. Try again.".to_string()
            }
            GuardianError::InvalidReminder(_) => {
                "Sorry, I couldn't understand the reminder format.".to_string()
            }
            GuardianError::AudioMissing(path) => {
                format!("Audio file not found: {}", path.display())
            }
            GuardianError::Audio(msg) => {
                format!("Audio could not be played: {}", msg)
            }
            GuardianError::Generic(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = GuardianError::InvalidTask("empty title".to_string());
        assert!(err.user_message().contains("Add task - [Title]"));
        // details stay out of the user-facing text
        assert!(!err.user_message().contains("empty title"));

        let err = GuardianError::AudioMissing("/tmp/welcome.wav".into());
        assert_eq!(err.user_message(), "Audio file not found: /tmp/welcome.wav");

        let err = GuardianError::Audio("missing file".to_string());
        assert!(err.user_message().contains("missing file"));
    }

    #[test]
    fn test_error_display() {
        let err = GuardianError::InvalidReminder("in 3 months".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Invalid reminder"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: GuardianError = io.into();
        assert!(matches!(err, GuardianError::Io(_)));
    }
}
