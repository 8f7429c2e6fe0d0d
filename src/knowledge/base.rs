/// Knowledge base lookups
///
/// Every table is an ordered list of (key, response) pairs with lower-cased
/// keys. Lookups lower-case their input the same way, so comparisons are
/// case-insensitive without a custom comparer.

use crate::knowledge::tables::{
    KEYWORD_RESPONSES, SENTIMENT_RESPONSES, STATIC_RESPONSES, TOPIC_RESPONSES,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Immutable response tables, shareable across sessions
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    responses: Vec<(String, String)>,
    keywords: Vec<(String, String)>,
    topics: Vec<(String, Vec<String>)>,
    sentiments: Vec<(String, String)>,
}

impl KnowledgeBase {
    /// Build the knowledge base from the built-in tables
    pub fn builtin() -> Self {
        Self::from_tables(
            STATIC_RESPONSES,
            KEYWORD_RESPONSES,
            TOPIC_RESPONSES,
            SENTIMENT_RESPONSES,
        )
    }

    /// Build from arbitrary tables. Keys are normalized to lower case here;
    /// a later duplicate key is dropped so each mapping stays key-unique.
    pub fn from_tables(
        responses: &[(&str, &str)],
        keywords: &[(&str, &str)],
        topics: &[(&str, &[&str])],
        sentiments: &[(&str, &str)],
    ) -> Self {
        Self {
            responses: normalize(responses.iter().map(|(k, v)| (*k, v.to_string()))),
            keywords: normalize(keywords.iter().map(|(k, v)| (*k, v.to_string()))),
            topics: normalize(
                topics
                    .iter()
                    .map(|(k, v)| (*k, v.iter().map(|s| s.to_string()).collect())),
            ),
            sentiments: normalize(sentiments.iter().map(|(k, v)| (*k, v.to_string()))),
        }
    }

    /// Exact whole-input match against the static table
    pub fn static_response(&self, input: &str) -> Option<&str> {
        let key = input.trim().to_lowercase();
        lookup(&self.responses, &key).map(String::as_str)
    }

    /// Exact key match against the keyword table
    pub fn keyword_response(&self, key: &str) -> Option<&str> {
        let key = key.trim().to_lowercase();
        lookup(&self.keywords, &key).map(String::as_str)
    }

    /// First keyword (in table order) contained anywhere in the input
    pub fn find_keyword(&self, input: &str) -> Option<(&str, &str)> {
        first_contained(&self.keywords, &input.to_lowercase())
    }

    /// First sentiment keyword (in table order) contained in the input
    pub fn find_sentiment(&self, input: &str) -> Option<(&str, &str)> {
        first_contained(&self.sentiments, &input.to_lowercase())
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topic_variants(topic).is_some()
    }

    /// All variants for a topic, in their defined order
    pub fn topic_variants(&self, topic: &str) -> Option<&[String]> {
        let key = topic.trim().to_lowercase();
        lookup(&self.topics, &key).map(Vec::as_slice)
    }

    /// One variant for a topic, chosen uniformly at random
    pub fn random_topic_tip<R: Rng + ?Sized>(&self, topic: &str, rng: &mut R) -> Option<&str> {
        self.topic_variants(topic)?
            .choose(rng)
            .map(String::as_str)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize<'a, V>(pairs: impl Iterator<Item = (&'a str, V)>) -> Vec<(String, V)> {
    let mut table: Vec<(String, V)> = Vec::new();
    for (key, value) in pairs {
        let key = key.trim().to_lowercase();
        if !table.iter().any(|(existing, _)| *existing == key) {
            table.push((key, value));
        }
    }
    table
}

fn lookup<'a, V>(table: &'a [(String, V)], key: &str) -> Option<&'a V> {
    table.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

fn first_contained<'a>(table: &'a [(String, String)], haystack: &str) -> Option<(&'a str, &'a str)> {
    table
        .iter()
        .find(|(k, _)| haystack.contains(k.as_str()))
        .map(|(k, v)| (k.as_str(), v.as_str()))
}
