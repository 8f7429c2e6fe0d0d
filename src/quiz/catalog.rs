/// The built-in question catalog

/// One multiple-choice question. Options are labelled A, B, C... in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options`
    pub correct_option: usize,
    pub explanation: &'static str,
}

impl QuizQuestion {
    /// Letter shown next to the option at `index`
    pub fn letter(index: usize) -> char {
        u8::try_from(index)
            .ok()
            .and_then(|i| b'A'.checked_add(i))
            .map(char::from)
            .unwrap_or('?')
    }

    pub fn correct_letter(&self) -> char {
        Self::letter(self.correct_option)
    }

    /// Only the first character of an answer counts, case-insensitively
    pub fn is_correct(&self, answer: &str) -> bool {
        answer
            .trim()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase() == self.correct_letter())
            .unwrap_or(false)
    }
}

pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        question: "What should you do if you receive an email asking for your password?",
        options: &[
            "Reply with your password",
            "Delete the email",
            "Report the email as phishing",
            "Ignore it",
        ],
        correct_option: 2,
        explanation: "Reporting phishing emails helps prevent scams and protects others.",
    },
    QuizQuestion {
        question: "True or False: Using the same password for every account is safe.",
        options: &["True", "False"],
        correct_option: 1,
        explanation: "False! Reusing passwords increases risk if one account is breached.",
    },
    QuizQuestion {
        question: "Which is a strong password example?",
        options: &["123456", "Password!", "Winter2025$", "qwerty"],
        correct_option: 2,
        explanation: "\"Winter2025$\" includes uppercase, numbers, and a special character — good job!",
    },
    QuizQuestion {
        question: "What does 2FA stand for?",
        options: &[
            "Two-Factor Authentication",
            "Two-Firewall Access",
            "Two-Factor Access",
            "Twice-Filtered Authentication",
        ],
        correct_option: 0,
        explanation: "2FA adds an extra layer of security — always enable it when possible.",
    },
    QuizQuestion {
        question: "Which site is safer to enter personal information?",
        options: &["http://example.com", "https://example.com"],
        correct_option: 1,
        explanation: "HTTPS encrypts your data, making it safer from interception.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_answer_key() {
        let letters: String = QUESTIONS.iter().map(|q| q.correct_letter()).collect();
        assert_eq!(letters, "CBCAB");
    }

    #[test]
    fn test_explanations_are_verbatim() {
        assert_eq!(
            QUESTIONS[2].explanation,
            "\"Winter2025$\" includes uppercase, numbers, and a special character \u{2014} good job!"
        );
        assert_eq!(
            QUESTIONS[3].explanation,
            "2FA adds an extra layer of security \u{2014} always enable it when possible."
        );
    }

    #[test]
    fn test_correct_option_in_range() {
        for q in QUESTIONS {
            assert!(q.correct_option < q.options.len(), "{}", q.question);
        }
    }

    #[test]
    fn test_is_correct_uses_first_char() {
        let q = &QUESTIONS[0];
        assert!(q.is_correct("c"));
        assert!(q.is_correct("  C) report it"));
        assert!(q.is_correct("cat"));
        assert!(!q.is_correct("A"));
        assert!(!q.is_correct(""));
    }

    #[test]
    fn test_letter() {
        assert_eq!(QuizQuestion::letter(0), 'A');
        assert_eq!(QuizQuestion::letter(3), 'D');
    }
}
