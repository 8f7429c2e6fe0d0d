/// Knowledge module
///
/// Static and randomized response tables the assistant answers from.

pub mod base;
pub mod tables;

pub use base::KnowledgeBase;
