/// Chat session
///
/// Owns everything one conversation mutates (tasks, activity log,
/// conversation memory, the tip rng) and carries out whatever the router
/// decides for each input line. The knowledge base is shared read-only, so
/// several sessions can run side by side without seeing each other's state.
///
/// Most intents append one activity entry. Task and reminder flows append
/// one per step instead ("Task added", "Reminder set ...", then the
/// "Added ... via NLP command" summary), so a single turn can add up to
/// four entries. The quiz logs its start and its completion.

use crate::config::ChatConfig;
use crate::error::{GuardianError, Result};
use crate::intent::router::{extract_interest, extract_task_title};
use crate::intent::{classify, ConversationState, Intent, ReminderParser};
use crate::knowledge::KnowledgeBase;
use crate::quiz::QuizEngine;
use crate::store::{ActivityLog, Task, TaskStore, DATE_FORMAT};
use crate::ui::{Presenter, SPEAKER};
use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, info, warn};

const EXIT_COMMAND: &str = "exit";
const INPUT_TROUBLE: &str =
    "It seems like something went wrong with the input. Let's continue whenever you're ready.";
const REMINDER_PROMPT: &str = "Would you like a reminder? (e.g., Remind me in 3 days): ";
const ERROR_LOG_ENTRY: &str = "Error processing user input.";

/// Source of "now" for reminders and activity timestamps
pub type Clock = fn() -> DateTime<Local>;

pub struct Session {
    knowledge: Arc<KnowledgeBase>,
    tasks: TaskStore,
    activity: ActivityLog,
    state: ConversationState,
    reminders: ReminderParser,
    quiz: QuizEngine,
    rng: StdRng,
    typing_delay_ms: u64,
    clock: Clock,
}

impl Session {
    pub fn new(knowledge: Arc<KnowledgeBase>, config: &ChatConfig) -> Result<Self> {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            knowledge,
            tasks: TaskStore::new(),
            activity: ActivityLog::new(),
            state: ConversationState::default(),
            reminders: ReminderParser::new()?,
            quiz: QuizEngine::new(config.typing_delay_ms),
            rng,
            typing_delay_ms: config.typing_delay_ms,
            clock: Local::now,
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Read-route-respond until the user types "exit" or input ends
    pub fn run_chat(&mut self, user_name: &str, presenter: &mut dyn Presenter) -> Result<()> {
        loop {
            presenter.write_line("")?;
            presenter.write_prompt(&format!("{}: ", user_name))?;

            let line = match presenter.read_line() {
                Some(line) => line,
                None if presenter.input_closed() => {
                    info!("input closed, leaving chat");
                    break;
                }
                None => {
                    presenter.say(INPUT_TROUBLE, self.typing_delay_ms)?;
                    continue;
                }
            };

            if line.trim().eq_ignore_ascii_case(EXIT_COMMAND) {
                info!("user left the chat");
                break;
            }

            self.handle_line(&line, presenter);
        }
        Ok(())
    }

    /// Route one line and act on it. Nothing that goes wrong while handling
    /// the line escapes; the user sees a generic error and the chat goes on.
    pub fn handle_line(&mut self, input: &str, presenter: &mut dyn Presenter) -> Intent {
        let intent = classify(input, &self.state, &self.knowledge);

        if let Err(e) = self.dispatch(intent, input.trim(), presenter) {
            warn!(error = %e, ?intent, "failed to handle input");
            let message = format!(
                "{} encountered an error while processing your input. Please try again.",
                SPEAKER
            );
            if let Err(e) = presenter.show_error(&message) {
                warn!(error = %e, "could not show error");
            }
            self.log(ERROR_LOG_ENTRY);
        }

        intent
    }

    fn dispatch(&mut self, intent: Intent, input: &str, presenter: &mut dyn Presenter) -> Result<()> {
        let delay = self.typing_delay_ms;
        let kb = Arc::clone(&self.knowledge);
        let lower = input.to_lowercase();

        match intent {
            Intent::Empty => {
                presenter.say_error("I didn't quite catch that. Could you please say something?")?;
            }

            Intent::ShowActivityLog => self.show_activity_log(presenter)?,

            Intent::NaturalReminder => {
                self.natural_reminder(input, presenter)?;
                self.log(format!("Added reminder via NLP command: '{}'", input));
            }

            Intent::AddTask => match extract_task_title(input) {
                Some(title) => {
                    self.add_task_flow(&title, None, presenter)?;
                    self.log(format!("Added task via NLP command: '{}'", title));
                }
                None => presenter.say_error(
                    "Please specify the task title after 'add task'. For example, 'Add task - update password'.",
                )?,
            },

            Intent::StartQuiz => {
                self.log("Quiz started.");
                self.quiz.run(presenter)?;
                self.log("Quiz completed.");
            }

            Intent::ShowTasks => {
                self.show_tasks(presenter)?;
                self.log("Displayed task list.");
            }

            Intent::PhishingTip => {
                self.state.current_topic = Some("phishing".to_string());
                let tip = kb
                    .random_topic_tip("phishing", &mut self.rng)
                    .ok_or_else(|| missing("phishing tips"))?;
                presenter.say(&format!("Here's a tip on phishing: {}", tip), delay)?;
                self.log("Provided phishing tip.");
            }

            Intent::DeclareInterest => {
                let interest = extract_interest(input).ok_or_else(|| missing("interest"))?;
                presenter.say(
                    &format!("Great! I'll remember that you're interested in {}.", interest),
                    delay,
                )?;
                self.state.current_topic = Some(interest.to_lowercase());
                self.log(format!("User interest noted: {}", interest));
                self.state.interest = Some(interest);
            }

            Intent::Sentiment => {
                let (key, response) = kb
                    .find_sentiment(input)
                    .ok_or_else(|| missing("sentiment response"))?;
                presenter.say(response, delay)?;
                self.log(format!("Handled sentiment expression: '{}'", key));
            }

            Intent::InterestTip => {
                let interest = self
                    .state
                    .interest
                    .clone()
                    .ok_or_else(|| missing("interest"))?;
                let topic = interest.to_lowercase();
                presenter.say(
                    &format!("As someone interested in {}, here's a tip:", interest),
                    delay,
                )?;

                if let Some(tip) = kb.random_topic_tip(&topic, &mut self.rng) {
                    presenter.say(tip, delay)?;
                    self.log(format!("Provided personalized tip for interest: {}", interest));
                } else if let Some(tip) = kb.keyword_response(&topic) {
                    presenter.say(tip, delay)?;
                    self.log(format!("Provided keyword tip for interest: {}", interest));
                } else {
                    presenter.say(
                        "I don't have specific tips on that yet, but I’ll remember it for the future!",
                        delay,
                    )?;
                    self.log(format!("No tip available for interest: {}", interest));
                }
                self.state.current_topic = Some(topic);
            }

            Intent::FollowUp => {
                let topic = self
                    .state
                    .current_topic
                    .clone()
                    .ok_or_else(|| missing("current topic"))?;
                let tip = kb
                    .random_topic_tip(&topic, &mut self.rng)
                    .ok_or_else(|| missing("follow-up tip"))?;
                presenter.say(&format!("Here's more on {}: {}", topic, tip), delay)?;
                self.log(format!("Provided follow-up explanation for topic: {}", topic));
            }

            Intent::StaticResponse => {
                let response = kb
                    .static_response(&lower)
                    .ok_or_else(|| missing("static response"))?;
                presenter.say(response, delay)?;
                self.log(format!("Responded with static response for: '{}'", lower));
                self.state.current_topic = None;
            }

            Intent::TopicResponse => {
                let tip = kb
                    .random_topic_tip(&lower, &mut self.rng)
                    .ok_or_else(|| missing("topic response"))?;
                let interested = self
                    .state
                    .interest
                    .as_deref()
                    .is_some_and(|interest| interest.eq_ignore_ascii_case(input));
                if interested {
                    presenter.say(
                        &format!("As someone interested in {}, here's a tip for you:", input),
                        delay,
                    )?;
                }
                presenter.say(tip, delay)?;
                self.log(format!("Provided topic response for: '{}'", lower));
                self.state.current_topic = Some(lower);
            }

            Intent::KeywordResponse => {
                let (key, response) = kb
                    .find_keyword(&lower)
                    .ok_or_else(|| missing("keyword response"))?;
                presenter.say(response, delay)?;
                self.log(format!("Provided keyword response for: '{}'", key));
                self.state.current_topic = Some(key.to_string());
            }

            Intent::Unrecognized => {
                presenter.say("I'm not sure I understand. Can you try rephrasing?", delay)?;
                self.log(format!("Unrecognized input: '{}'", lower));
                self.state.current_topic = None;
            }
        }
        Ok(())
    }

    /// Create a task from a title. A date recovered elsewhere is attached
    /// as-is; otherwise the user is asked whether they want a reminder.
    /// Returns `None` when the title is blank and nothing was added.
    pub fn add_task_flow(
        &mut self,
        title: &str,
        reminder_date: Option<DateTime<Local>>,
        presenter: &mut dyn Presenter,
    ) -> Result<Option<Task>> {
        let title = title.trim();
        if title.is_empty() {
            let err = GuardianError::InvalidTask("empty title".to_string());
            presenter.say_error(&err.user_message())?;
            return Ok(None);
        }

        let description = TaskStore::describe(title);
        presenter.say(
            &format!("Task added with the description: \"{}\".", description),
            self.typing_delay_ms,
        )?;

        let reminder_date = match reminder_date {
            Some(date) => Some(date),
            None => self.ask_for_reminder(title, presenter)?,
        };

        let task = self.tasks.add(title, &description, reminder_date)?.clone();
        self.log(format!("Task added: '{}'", task.title));
        Ok(Some(task))
    }

    fn ask_for_reminder(
        &mut self,
        title: &str,
        presenter: &mut dyn Presenter,
    ) -> Result<Option<DateTime<Local>>> {
        presenter.write_prompt(&format!("{}: {}", SPEAKER, REMINDER_PROMPT))?;
        let reply = presenter.read_line().unwrap_or_default();

        let Some(text) = ReminderParser::follow_up_text(&reply) else {
            presenter.say("No reminder set.", self.typing_delay_ms)?;
            return Ok(None);
        };

        let now = (self.clock)();
        match self.reminders.parse_relative(&text, now) {
            Some(date) => {
                let days = (date.date_naive() - now.date_naive()).num_days();
                presenter.say(
                    &format!("Got it! I’ll remind you in {} days.", days),
                    self.typing_delay_ms,
                )?;
                self.log(format!(
                    "Reminder set for task '{}' on {}",
                    title,
                    date.format(DATE_FORMAT)
                ));
                Ok(Some(date))
            }
            None => {
                debug!(reply = %reply, "reminder follow-up not understood");
                let err = GuardianError::InvalidReminder(text);
                presenter.say_error(&err.user_message())?;
                Ok(None)
            }
        }
    }

    fn natural_reminder(&mut self, input: &str, presenter: &mut dyn Presenter) -> Result<()> {
        let delay = self.typing_delay_ms;
        let Some(reminder) = self.reminders.parse_natural(input, (self.clock)()) else {
            presenter.say("Sorry, I couldn't find a reminder phrase.", delay)?;
            return Ok(());
        };

        if let Some(title) = &reminder.title {
            self.add_task_flow(title, reminder.date, presenter)?;
        }

        match reminder.date {
            Some(date) => {
                let date = date.format(DATE_FORMAT).to_string();
                self.log(format!(
                    "Reminder set via NLP command for '{}' on {}",
                    reminder.title.as_deref().unwrap_or("unknown task"),
                    date
                ));
                presenter.say(&format!("Got it! I’ll remind you on {}.", date), delay)?;
            }
            None => presenter.say("Reminder noted without specific time.", delay)?,
        }
        Ok(())
    }

    fn show_tasks(&self, presenter: &mut dyn Presenter) -> Result<()> {
        presenter.show_divider("Your Cybersecurity Tasks")?;
        if self.tasks.is_empty() {
            return presenter.say("You have no tasks at the moment.", self.typing_delay_ms);
        }
        for task in self.tasks.list() {
            presenter.write_line(&task.to_string())?;
        }
        Ok(())
    }

    fn show_activity_log(&self, presenter: &mut dyn Presenter) -> Result<()> {
        presenter.show_divider("Activity Log (Last 10 Actions)")?;
        if self.activity.is_empty() {
            return presenter.say("No actions recorded yet.", self.typing_delay_ms);
        }
        for (i, entry) in self.activity.list().into_iter().enumerate() {
            presenter.write_line(&format!("{}. {}", i + 1, entry))?;
        }
        presenter.write_line("")
    }

    fn log(&mut self, description: impl Into<String>) {
        self.activity.record_at((self.clock)(), description);
    }
}

fn missing(what: &str) -> GuardianError {
    GuardianError::Generic(format!("no {} available", what))
}
