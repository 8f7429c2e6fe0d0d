/// Runs the quiz against a presenter, one blocking read per question

use crate::error::Result;
use crate::quiz::catalog::{QuizQuestion, QUESTIONS};
use crate::quiz::score::ScoreBand;
use crate::ui::Presenter;
use tracing::{debug, info};

const INSTRUCTIONS: &str =
    "Let's begin! Answer each question by typing the letter of your choice (A, B, C or D).";
const SKIP_MESSAGE: &str = "You didn't enter an answer. Let's skip to the next one.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub band: ScoreBand,
}

pub struct QuizEngine {
    questions: &'static [QuizQuestion],
    typing_delay_ms: u64,
}

impl QuizEngine {
    pub fn new(typing_delay_ms: u64) -> Self {
        Self::with_questions(QUESTIONS, typing_delay_ms)
    }

    pub fn with_questions(questions: &'static [QuizQuestion], typing_delay_ms: u64) -> Self {
        Self {
            questions,
            typing_delay_ms,
        }
    }

    /// Ask every question in order and report the final score. A blank or
    /// unreadable answer skips the question without penalty.
    pub fn run(&self, presenter: &mut dyn Presenter) -> Result<QuizResult> {
        let delay = self.typing_delay_ms;
        let mut score = 0;

        presenter.show_divider("Cybersecurity Quiz Time!")?;
        presenter.say(INSTRUCTIONS, delay)?;

        for (i, q) in self.questions.iter().enumerate() {
            presenter.write_line("")?;
            presenter.write_line(&format!("Question {}: {}", i + 1, q.question))?;
            for (idx, option) in q.options.iter().enumerate() {
                presenter.write_line(&format!("{}) {}", QuizQuestion::letter(idx), option))?;
            }

            presenter.write_prompt("Your answer: ")?;
            let answer = presenter.read_line().unwrap_or_default();

            if answer.trim().is_empty() {
                debug!(question = i + 1, "quiz question skipped");
                presenter.say(SKIP_MESSAGE, delay)?;
                continue;
            }

            if q.is_correct(&answer) {
                score += 1;
                presenter.say(&format!("Correct! {}", q.explanation), delay)?;
            } else {
                presenter.say(&format!("Oops! That’s not right. {}", q.explanation), delay)?;
            }
        }

        let total = self.questions.len();
        let band = ScoreBand::classify(score, total);

        presenter.show_divider("Quiz Complete")?;
        presenter.say(&format!("You got {} out of {} correct!", score, total), delay)?;
        presenter.say(band.message(), delay)?;

        info!(score, total, ?band, "quiz finished");
        Ok(QuizResult { score, total, band })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::presenter::scripted::ScriptedPresenter;

    fn run(answers: &[&str]) -> (QuizResult, ScriptedPresenter) {
        let mut presenter = ScriptedPresenter::new(answers);
        let result = QuizEngine::new(0).run(&mut presenter).unwrap();
        (result, presenter)
    }

    #[test]
    fn test_all_correct() {
        let (result, presenter) = run(&["C", "B", "C", "A", "B"]);
        assert_eq!(result.score, 5);
        assert_eq!(result.total, 5);
        assert_eq!(result.band, ScoreBand::Perfect);
        assert!(presenter.contains("You got 5 out of 5 correct!"));
        assert!(presenter.contains(ScoreBand::Perfect.message()));
    }

    #[test]
    fn test_lowercase_answers_count() {
        let (result, _) = run(&["c", "b", "c", "a", "b"]);
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_all_wrong() {
        let (result, presenter) = run(&["A", "A", "A", "B", "A"]);
        assert_eq!(result.score, 0);
        assert_eq!(result.band, ScoreBand::KeepPracticing);
        assert_eq!(
            presenter
                .typed()
                .iter()
                .filter(|t| t.contains("Oops! That’s not right."))
                .count(),
            5
        );
    }

    #[test]
    fn test_three_correct_is_middle_band() {
        let (result, presenter) = run(&["C", "B", "C", "D", "A"]);
        assert_eq!(result.score, 3);
        assert_eq!(result.band, ScoreBand::OnTrack);
        assert!(presenter.contains(ScoreBand::OnTrack.message()));
    }

    #[test]
    fn test_blank_answer_skips() {
        let (result, presenter) = run(&["", "B", "   ", "A", "B"]);
        assert_eq!(result.score, 3);
        assert_eq!(
            presenter.typed().iter().filter(|t| t.contains(SKIP_MESSAGE)).count(),
            2
        );
    }

    #[test]
    fn test_input_running_out_skips_remaining() {
        let (result, presenter) = run(&["C"]);
        assert_eq!(result.score, 1);
        assert!(presenter.contains("You got 1 out of 5 correct!"));
    }

    #[test]
    fn test_questions_and_options_shown() {
        let (_, presenter) = run(&["C", "B", "C", "A", "B"]);
        assert!(presenter.contains(
            "Question 1: What should you do if you receive an email asking for your password?"
        ));
        assert!(presenter.contains("C) Report the email as phishing"));
        assert!(presenter.contains("B) https://example.com"));
        assert!(presenter.contains("Cybersecurity Quiz Time!"));
        assert!(presenter.contains("Quiz Complete"));
    }
}
