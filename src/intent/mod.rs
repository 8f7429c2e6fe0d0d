/// Intent module
///
/// Decides what a line of user input is asking for and pulls structured
/// pieces (task titles, reminder dates) out of free text.

pub mod reminder;
pub mod router;

pub use reminder::{NaturalReminder, ReminderParser};
pub use router::{classify, ConversationState, Intent, RULES};

/// Byte offset of `needle` in `haystack`, ignoring ASCII case.
///
/// ASCII lower-casing keeps byte lengths, so the offset is valid on the
/// input string and the caller can slice it without losing case.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

/// Everything after the first occurrence of `phrase`, trimmed
pub(crate) fn text_after<'a>(haystack: &'a str, phrase: &str) -> Option<&'a str> {
    find_ignore_ascii_case(haystack, phrase).map(|idx| haystack[idx + phrase.len()..].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ignore_ascii_case() {
        assert_eq!(find_ignore_ascii_case("Add Task - X", "add task"), Some(0));
        assert_eq!(find_ignore_ascii_case("please CREATE TASK now", "create task"), Some(7));
        assert_eq!(find_ignore_ascii_case("nothing here", "quiz"), None);
    }

    #[test]
    fn test_text_after_keeps_case() {
        assert_eq!(
            text_after("Remind me to Call Bank tomorrow", "remind me to"),
            Some("Call Bank tomorrow")
        );
        assert_eq!(text_after("remind me to", "remind me to"), Some(""));
    }
}
