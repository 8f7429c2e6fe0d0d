/// Data models for session state
///
/// Plain values owned by the stores. Neither is mutated after creation.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used wherever a reminder date is shown
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format for activity entries
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A cybersecurity task the user asked to track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub reminder_date: Option<DateTime<Local>>,
}

impl Task {
    pub fn reminder_label(&self) -> Option<String> {
        self.reminder_date
            .map(|date| date.format(DATE_FORMAT).to_string())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.title, self.description)?;
        if let Some(label) = self.reminder_label() {
            write!(f, " (Reminder: {})", label)?;
        }
        Ok(())
    }
}

/// One line of the activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub description: String,
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.description
        )
    }
}
