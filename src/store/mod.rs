/// Store module
///
/// In-memory session state: the task list and the rolling activity log.
/// Nothing here outlives the process.

pub mod activity_log;
pub mod models;
pub mod tasks;

pub use activity_log::ActivityLog;
pub use models::*;
pub use tasks::TaskStore;
