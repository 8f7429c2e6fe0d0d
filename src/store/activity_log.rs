/// Rolling activity log
///
/// Remembers the most recent user-facing actions. Once full, every new
/// entry pushes the oldest one out.

use crate::store::models::ActivityEntry;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// How many actions the log keeps
pub const ACTIVITY_LOG_CAPACITY: usize = 10;

#[derive(Debug)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::with_capacity(ACTIVITY_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry stamped with the current local time
    pub fn record(&mut self, description: impl Into<String>) {
        self.record_at(Local::now(), description);
    }

    /// Append an entry with an explicit timestamp
    pub fn record_at(&mut self, timestamp: DateTime<Local>, description: impl Into<String>) {
        self.entries.push_back(ActivityEntry {
            timestamp,
            description: description.into(),
        });

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Entries oldest first
    pub fn list(&self) -> Vec<&ActivityEntry> {
        self.entries.iter().collect()
    }

    pub fn last(&self) -> Option<&ActivityEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_list() {
        let mut log = ActivityLog::new();
        assert!(log.is_empty());

        log.record("Quiz started.");
        log.record("Quiz completed.");

        let entries = log.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "Quiz started.");
        assert_eq!(log.last().unwrap().description, "Quiz completed.");
    }

    #[test]
    fn test_keeps_last_ten_in_order() {
        let mut log = ActivityLog::new();

        for i in 1..=15 {
            log.record(format!("action {}", i));
            assert!(log.len() <= ACTIVITY_LOG_CAPACITY);
        }

        let descriptions: Vec<String> =
            log.list().iter().map(|e| e.description.clone()).collect();
        let expected: Vec<String> = (6..=15).map(|i| format!("action {}", i)).collect();
        assert_eq!(descriptions, expected);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut log = ActivityLog::with_capacity(0);
        log.record("a");
        log.record("b");
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.list()[0].description, "b");
    }
}
