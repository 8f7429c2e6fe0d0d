// Pulls reminder dates (and sometimes task titles) out of free text
//
// Understands "... tomorrow" and "in <n> day(s)/week(s)". Nothing fancier.

use crate::error::Result;
use crate::intent::text_after;
use chrono::{DateTime, Days, Local};
use regex::Regex;
use tracing::debug;

const REMIND_ME_TO: &str = "remind me to";
const ADD_A_REMINDER_TO: &str = "add a reminder to";
const TOMORROW_SUFFIX: &str = " tomorrow";
const RELATIVE_PREFIX: &str = "in ";
const INNER_RELATIVE: &str = " in ";

// "<integer> <unit>", matched at the start of the text
const AMOUNT_PATTERN: &str = r"^([+-]?\d+)\s+(\S+)";

/// What a "remind me to ..." sentence boiled down to
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalReminder {
    pub title: Option<String>,
    pub date: Option<DateTime<Local>>,
}

pub struct ReminderParser {
    amount_regex: Regex,
}

impl ReminderParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            amount_regex: Regex::new(AMOUNT_PATTERN)?,
        })
    }

    /// Parse "remind me to X" / "add a reminder to X"
    ///
    /// Returns `None` when neither phrase is present. A trailing "tomorrow"
    /// becomes a date one day after `now` and is cut from the title. A
    /// remainder starting with "in <n> <unit>" yields a date (days and weeks
    /// only) and never a title. So does "<title> in <n> days/weeks" further
    /// on; an inner "in <n> <word>" with any other word is left to the title.
    /// Anything else is all title, no date.
    pub fn parse_natural(&self, input: &str, now: DateTime<Local>) -> Option<NaturalReminder> {
        let remainder =
            text_after(input, REMIND_ME_TO).or_else(|| text_after(input, ADD_A_REMINDER_TO))?;
        let lowercase = remainder.to_ascii_lowercase();

        let reminder = if lowercase.ends_with(TOMORROW_SUFFIX) {
            let title = remainder[..remainder.len() - TOMORROW_SUFFIX.len()].trim();
            NaturalReminder {
                title: non_blank(title),
                date: now.checked_add_days(Days::new(1)),
            }
        } else if let Some((amount, unit)) = self.find_relative(&lowercase) {
            // the title is dropped in this branch, whatever surrounded the amount
            NaturalReminder {
                title: None,
                date: offset(now, amount, &unit),
            }
        } else {
            NaturalReminder {
                title: non_blank(remainder),
                date: None,
            }
        };

        debug!(?reminder, "parsed natural reminder");
        Some(reminder)
    }

    /// Parse "<n> day(s)" / "<n> week(s)" from text whose leading
    /// "remind me in" has already been stripped
    pub fn parse_relative(&self, text: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
        let lowercase = text.to_lowercase();
        let (amount, unit) = self.match_amount(&lowercase)?;
        offset(now, amount, &unit)
    }

    /// Text to hand to `parse_relative` from an answer to "Would you like a
    /// reminder?", or `None` if the answer doesn't ask for one
    pub fn follow_up_text(reply: &str) -> Option<String> {
        let lowercase = reply.trim().to_lowercase();
        if lowercase.is_empty() || !lowercase.contains("remind me") {
            return None;
        }
        Some(lowercase.replace("remind me in", "").trim().to_string())
    }

    /// "in <n> <unit>" at the start of the text with any unit, or later in
    /// the text with a day or week unit
    fn find_relative(&self, lowercase: &str) -> Option<(i64, String)> {
        if let Some(rest) = lowercase.strip_prefix(RELATIVE_PREFIX) {
            if let Some(found) = self.match_amount(rest) {
                return Some(found);
            }
        }

        lowercase
            .match_indices(INNER_RELATIVE)
            .filter_map(|(idx, _)| self.match_amount(&lowercase[idx + INNER_RELATIVE.len()..]))
            .find(|(_, unit)| is_known_unit(unit))
    }

    fn match_amount(&self, text: &str) -> Option<(i64, String)> {
        let caps = self.amount_regex.captures(text.trim_start())?;
        let amount = caps.get(1)?.as_str().parse::<i64>().ok()?;
        let unit = caps.get(2)?.as_str().to_lowercase();
        Some((amount, unit))
    }
}

/// `now` moved forward by the amount; zero or negative amounts would not
/// land in the future, so they are rejected along with unknown units
fn offset(now: DateTime<Local>, amount: i64, unit: &str) -> Option<DateTime<Local>> {
    if amount < 1 {
        return None;
    }
    let days = match unit {
        "day" | "days" => u64::try_from(amount).ok()?,
        "week" | "weeks" => u64::try_from(amount).ok()?.checked_mul(7)?,
        _ => return None,
    };
    now.checked_add_days(Days::new(days))
}

fn is_known_unit(unit: &str) -> bool {
    matches!(unit, "day" | "days" | "week" | "weeks")
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
