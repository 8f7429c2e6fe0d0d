// Keeps the user's cybersecurity tasks, in the order they were added
//
// Append-only: tasks are never edited or removed during a session

use crate::error::{GuardianError, Result};
use crate::store::models::Task;
use chrono::{DateTime, Local};
use tracing::debug;

const PRIVACY_DESCRIPTION: &str =
    "Review your account privacy settings to ensure your data is protected.";
const PASSWORD_DESCRIPTION: &str = "Update your passwords and ensure they are strong and unique.";
const TWO_FACTOR_DESCRIPTION: &str = "Set up two-factor authentication for added security.";
const PHISHING_DESCRIPTION: &str = "Learn how to identify and report phishing emails.";

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. The title must not be blank.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        reminder_date: Option<DateTime<Local>>,
    ) -> Result<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(GuardianError::InvalidTask("empty title".to_string()));
        }

        debug!(title, has_reminder = reminder_date.is_some(), "task added");
        self.tasks.push(Task {
            title: title.to_string(),
            description: description.to_string(),
            reminder_date,
        });

        self.tasks
            .last()
            .ok_or_else(|| GuardianError::Generic("task list is empty after insert".to_string()))
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Pick a description for a task title
    ///
    /// First match wins: privacy, password, 2FA, phishing, then a generic
    /// line that mentions the title.
    pub fn describe(title: &str) -> String {
        let lowercase = title.to_lowercase();

        if lowercase.contains("privacy") {
            PRIVACY_DESCRIPTION.to_string()
        } else if lowercase.contains("password") {
            PASSWORD_DESCRIPTION.to_string()
        } else if lowercase.contains("2fa") || lowercase.contains("two-factor") {
            TWO_FACTOR_DESCRIPTION.to_string()
        } else if lowercase.contains("phishing") {
            PHISHING_DESCRIPTION.to_string()
        } else {
            format!("Task: {} - Please stay cyber-aware.", title.trim())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_describe_rules() {
        assert_eq!(TaskStore::describe("Update password"), PASSWORD_DESCRIPTION);
        assert_eq!(
            TaskStore::describe("review privacy settings"),
            PRIVACY_DESCRIPTION
        );
        assert_eq!(TaskStore::describe("Enable 2FA"), TWO_FACTOR_DESCRIPTION);
        assert_eq!(
            TaskStore::describe("turn on two-factor login"),
            TWO_FACTOR_DESCRIPTION
        );
        assert_eq!(TaskStore::describe("phishing drill"), PHISHING_DESCRIPTION);
        assert_eq!(
            TaskStore::describe("backup laptop"),
            "Task: backup laptop - Please stay cyber-aware."
        );
    }

    #[test]
    fn test_describe_priority() {
        // privacy beats password, password beats phishing
        assert_eq!(
            TaskStore::describe("password privacy audit"),
            PRIVACY_DESCRIPTION
        );
        assert_eq!(
            TaskStore::describe("phishing password reset"),
            PASSWORD_DESCRIPTION
        );
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut store = TaskStore::new();
        assert!(store.is_empty());

        store.add("first", "one", None).unwrap();
        store
            .add("second", "two", Some(Local::now() + Duration::days(2)))
            .unwrap();

        let titles: Vec<&str> = store.list().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(store.len(), 2);
        assert!(store.list()[1].reminder_date.is_some());
    }

    #[test]
    fn test_add_blank_title() {
        let mut store = TaskStore::new();
        let result = store.add("   ", "desc", None);

        match result {
            Err(GuardianError::InvalidTask(_)) => {}
            _ => panic!("Expected InvalidTask error"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_trims_title() {
        let mut store = TaskStore::new();
        let task = store.add("  lock screen  ", "desc", None).unwrap();
        assert_eq!(task.title, "lock screen");
    }
}
