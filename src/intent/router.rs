/// Intent routing
///
/// One line of input is matched against an ordered rule table; the first
/// rule whose predicate holds decides the intent. Later rules are shadowed
/// on purpose: "remind me to review password" is a reminder, never a
/// password tip. The table is plain data so the ordering can be read and
/// tested directly.

use crate::intent::text_after;
use crate::knowledge::KnowledgeBase;
use tracing::debug;

const LOG_VIEW_PHRASES: &[&str] = &[
    "show activity log",
    "what have you done for me?",
    "show my actions",
    "task summary",
];
const REMINDER_PHRASES: &[&str] = &["remind me to", "add a reminder to"];
const TASK_PREFIXES: &[&str] = &["add task", "add a task"];
const TASK_INFIX: &str = "create task";
const QUIZ_PHRASES: &[&str] = &["start quiz", "cyber quiz", "quiz game", "quiz"];
const TASK_LIST_PHRASES: &[&str] = &["show tasks", "list tasks", "my tasks"];
const PHISHING: &str = "phishing";
const INTEREST_PREFIXES: &[&str] = &["i'm interested in ", "i am interested in "];
const TIP: &str = "tip";
const FOLLOW_UP_PHRASES: &[&str] = &[
    "more",
    "explain",
    "i don't understand",
    "what do you mean",
    "huh",
    "i'm confused",
];

/// What the user is asking for, in rule priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Empty,
    ShowActivityLog,
    NaturalReminder,
    AddTask,
    StartQuiz,
    ShowTasks,
    PhishingTip,
    DeclareInterest,
    Sentiment,
    InterestTip,
    FollowUp,
    StaticResponse,
    TopicResponse,
    KeywordResponse,
    Unrecognized,
}

/// Conversation memory for one chat session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationState {
    /// Topic of the last answer, lower-cased
    pub current_topic: Option<String>,
    /// What the user said they are interested in, as typed
    pub interest: Option<String>,
}

impl ConversationState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A trimmed input line plus its lower-cased form
#[derive(Debug)]
pub struct Turn<'a> {
    pub raw: &'a str,
    pub lower: String,
}

impl<'a> Turn<'a> {
    pub fn new(input: &'a str) -> Self {
        let raw = input.trim();
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.lower.contains(p))
    }

    fn starts_with_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.lower.starts_with(p))
    }
}

type Predicate = fn(&Turn, &ConversationState, &KnowledgeBase) -> bool;

pub struct Rule {
    pub intent: Intent,
    pub matches: Predicate,
}

/// The routing table. Evaluated top to bottom; first match wins.
pub const RULES: &[Rule] = &[
    Rule {
        intent: Intent::Empty,
        matches: |turn, _, _| turn.raw.is_empty(),
    },
    Rule {
        intent: Intent::ShowActivityLog,
        matches: |turn, _, _| LOG_VIEW_PHRASES.contains(&turn.lower.as_str()),
    },
    Rule {
        intent: Intent::NaturalReminder,
        matches: |turn, _, _| turn.contains_any(REMINDER_PHRASES),
    },
    Rule {
        intent: Intent::AddTask,
        matches: |turn, _, _| {
            turn.starts_with_any(TASK_PREFIXES) || turn.lower.contains(TASK_INFIX)
        },
    },
    Rule {
        intent: Intent::StartQuiz,
        matches: |turn, _, _| turn.contains_any(QUIZ_PHRASES),
    },
    Rule {
        intent: Intent::ShowTasks,
        matches: |turn, _, _| turn.contains_any(TASK_LIST_PHRASES),
    },
    Rule {
        intent: Intent::PhishingTip,
        matches: |turn, _, _| turn.lower.contains(PHISHING),
    },
    Rule {
        intent: Intent::DeclareInterest,
        matches: |turn, _, _| turn.starts_with_any(INTEREST_PREFIXES),
    },
    Rule {
        intent: Intent::Sentiment,
        matches: |turn, _, kb| kb.find_sentiment(&turn.lower).is_some(),
    },
    Rule {
        intent: Intent::InterestTip,
        matches: |turn, state, _| state.interest.is_some() && turn.lower.contains(TIP),
    },
    Rule {
        intent: Intent::FollowUp,
        matches: |turn, state, kb| match &state.current_topic {
            Some(topic) => turn.contains_any(FOLLOW_UP_PHRASES) && kb.has_topic(topic),
            None => false,
        },
    },
    Rule {
        intent: Intent::StaticResponse,
        matches: |turn, _, kb| kb.static_response(&turn.lower).is_some(),
    },
    Rule {
        intent: Intent::TopicResponse,
        matches: |turn, _, kb| kb.has_topic(&turn.lower),
    },
    Rule {
        intent: Intent::KeywordResponse,
        matches: |turn, _, kb| kb.find_keyword(&turn.lower).is_some(),
    },
    Rule {
        intent: Intent::Unrecognized,
        matches: |_, _, _| true,
    },
];

/// Decide the intent for one input line
pub fn classify(input: &str, state: &ConversationState, kb: &KnowledgeBase) -> Intent {
    let turn = Turn::new(input);
    let intent = RULES
        .iter()
        .find(|rule| (rule.matches)(&turn, state, kb))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unrecognized);

    debug!(?intent, input = turn.raw, "classified input");
    intent
}

/// Task title after "add task" / "add a task" / "create task", with a
/// leading "-" stripped. Case is kept from the input.
pub fn extract_task_title(input: &str) -> Option<String> {
    TASK_PREFIXES
        .iter()
        .chain(std::iter::once(&TASK_INFIX))
        .find_map(|prefix| text_after(input, prefix))
        .map(|after| after.strip_prefix('-').unwrap_or(after).trim().to_string())
        .filter(|title| !title.is_empty())
}

/// The subject after "i'm interested in" / "i am interested in"
pub fn extract_interest(input: &str) -> Option<String> {
    text_after(input.trim(), "in ")
        .map(str::to_string)
        .filter(|interest| !interest.is_empty())
}
