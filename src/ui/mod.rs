/// Terminal integration module
///
/// The `Presenter` seam the chat logic talks through, the real terminal
/// implementation, and best-effort welcome sound playback.

pub mod audio;
pub mod presenter;
pub mod terminal;

pub use audio::WelcomeSound;
pub use presenter::{Presenter, SPEAKER};
pub use terminal::TerminalPresenter;
