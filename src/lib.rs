/// cyberguardian library
///
/// A terminal companion that answers cybersecurity questions, keeps a small
/// task list with reminders, and runs a short quiz.

pub mod config;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod quiz;
pub mod session;
pub mod store;
pub mod ui;

// Re-exports for convenience
pub use config::ChatConfig;
pub use error::{GuardianError, Result};
pub use knowledge::KnowledgeBase;
pub use session::Session;
