/// Presenter seam
///
/// Everything the assistant shows or reads goes through this trait. The
/// chat logic hands over plain text and never deals with colors, pacing or
/// framing itself.

use crate::error::Result;

/// Name the assistant speaks under
pub const SPEAKER: &str = "CyberGuardian";

pub trait Presenter {
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Same as `write_line`, paced one character at a time for display
    fn write_typed(&mut self, text: &str, per_char_delay_ms: u64) -> Result<()>;

    /// Text shown right before a read, without a line break
    fn write_prompt(&mut self, text: &str) -> Result<()>;

    /// Blocks until a line arrives. `None` means nothing usable was read.
    fn read_line(&mut self) -> Option<String>;

    fn show_error(&mut self, text: &str) -> Result<()>;

    fn show_banner(&mut self, title: &str) -> Result<()>;

    fn show_divider(&mut self, title: &str) -> Result<()>;

    /// True once the input side has ended for good (EOF)
    fn input_closed(&self) -> bool {
        false
    }

    /// A typed line from the assistant
    fn say(&mut self, text: &str, per_char_delay_ms: u64) -> Result<()> {
        self.write_typed(&format!("{}: {}", SPEAKER, text), per_char_delay_ms)
    }

    /// An error line from the assistant
    fn say_error(&mut self, text: &str) -> Result<()> {
        self.show_error(&format!("{}: {}", SPEAKER, text))
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::Presenter;
    use crate::error::{GuardianError, Result};
    use std::collections::VecDeque;

    /// What kind of output a line was emitted as
    #[derive(Debug, Clone, PartialEq)]
    pub enum Shown {
        Line(String),
        Typed(String),
        Prompt(String),
        Error(String),
        Banner(String),
        Divider(String),
    }

    impl Shown {
        pub fn text(&self) -> &str {
            match self {
                Shown::Line(t)
                | Shown::Typed(t)
                | Shown::Prompt(t)
                | Shown::Error(t)
                | Shown::Banner(t)
                | Shown::Divider(t) => t,
            }
        }
    }

    /// Feeds canned input and records everything shown
    #[derive(Debug, Default)]
    pub struct ScriptedPresenter {
        inputs: VecDeque<String>,
        pub shown: Vec<Shown>,
        /// Any write whose text contains this fails with an I/O error
        pub fail_on: Option<String>,
    }

    impl ScriptedPresenter {
        pub fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn remaining_inputs(&self) -> usize {
            self.inputs.len()
        }

        pub fn contains(&self, needle: &str) -> bool {
            self.shown.iter().any(|s| s.text().contains(needle))
        }

        pub fn errors(&self) -> Vec<&str> {
            self.shown
                .iter()
                .filter_map(|s| match s {
                    Shown::Error(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn typed(&self) -> Vec<&str> {
            self.shown
                .iter()
                .filter_map(|s| match s {
                    Shown::Typed(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn clear(&mut self) {
            self.shown.clear();
        }

        fn push(&mut self, shown: Shown) -> Result<()> {
            if let Some(needle) = &self.fail_on {
                if shown.text().contains(needle.as_str()) {
                    return Err(GuardianError::Io(std::io::Error::new(
                        std::io::ErrorKind::BrokenPipe,
                        "scripted failure",
                    )));
                }
            }
            self.shown.push(shown);
            Ok(())
        }
    }

    impl Presenter for ScriptedPresenter {
        fn write_line(&mut self, text: &str) -> Result<()> {
            self.push(Shown::Line(text.to_string()))
        }

        fn write_typed(&mut self, text: &str, _per_char_delay_ms: u64) -> Result<()> {
            self.push(Shown::Typed(text.to_string()))
        }

        fn write_prompt(&mut self, text: &str) -> Result<()> {
            self.push(Shown::Prompt(text.to_string()))
        }

        fn read_line(&mut self) -> Option<String> {
            self.inputs.pop_front()
        }

        fn show_error(&mut self, text: &str) -> Result<()> {
            self.push(Shown::Error(text.to_string()))
        }

        fn show_banner(&mut self, title: &str) -> Result<()> {
            self.push(Shown::Banner(title.to_string()))
        }

        fn show_divider(&mut self, title: &str) -> Result<()> {
            self.push(Shown::Divider(title.to_string()))
        }

        fn input_closed(&self) -> bool {
            self.inputs.is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scripted::{ScriptedPresenter, Shown};
    use super::*;

    #[test]
    fn test_say_prefixes_speaker() {
        let mut presenter = ScriptedPresenter::new(&[]);
        presenter.say("hello", 0).unwrap();
        presenter.say_error("oops").unwrap();

        assert_eq!(
            presenter.shown,
            vec![
                Shown::Typed("CyberGuardian: hello".to_string()),
                Shown::Error("CyberGuardian: oops".to_string()),
            ]
        );
    }

    #[test]
    fn test_scripted_input_runs_out() {
        let mut presenter = ScriptedPresenter::new(&["a"]);
        assert!(!presenter.input_closed());
        assert_eq!(presenter.read_line().as_deref(), Some("a"));
        assert!(presenter.input_closed());
        assert_eq!(presenter.read_line(), None);
    }
}
