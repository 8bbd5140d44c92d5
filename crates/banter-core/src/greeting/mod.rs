//! Greeting rule matching for Banter.
//!
//! An ordered table of regular-expression rules, each paired with a fixed
//! set of canned replies. The first rule whose pattern matches the
//! lower-cased prompt wins, and one of its replies is drawn uniformly at
//! random. Prompts that match no rule fall through to the generation
//! backend.

pub mod rules;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

/// Errors from building greeting rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("invalid greeting pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("greeting rule '{pattern}' has no candidate replies")]
    NoReplies { pattern: String },
}

/// A single greeting rule: a compiled pattern plus its candidate replies.
///
/// Patterns are matched against the lower-cased prompt with search
/// semantics, so they are written in lower case and are unanchored.
#[derive(Debug)]
pub struct GreetingRule {
    pattern: Regex,
    replies: Vec<String>,
}

impl GreetingRule {
    /// Compile a rule from a pattern and a non-empty reply set.
    pub fn new(pattern: &str, replies: Vec<String>) -> Result<Self, RuleError> {
        if replies.is_empty() {
            return Err(RuleError::NoReplies {
                pattern: pattern.to_string(),
            });
        }
        let compiled = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: compiled,
            replies,
        })
    }

    /// The source pattern this rule was compiled from.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The candidate replies for this rule.
    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    fn is_match(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }
}

/// An ordered set of greeting rules.
///
/// Declaration order is match priority: the first matching rule wins,
/// regardless of how specific later patterns are.
#[derive(Debug, Default)]
pub struct GreetingTable {
    rules: Vec<GreetingRule>,
}

impl GreetingTable {
    pub fn new(rules: Vec<GreetingRule>) -> Self {
        Self { rules }
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the first rule whose pattern matches the prompt.
    ///
    /// The prompt is lower-cased for matching only; callers keep the
    /// original casing for display and storage.
    pub fn find(&self, prompt: &str) -> Option<&GreetingRule> {
        let lowered = prompt.to_lowercase();
        self.rules.iter().find(|rule| rule.is_match(&lowered))
    }

    /// Pick a canned reply for the prompt, if any rule matches.
    ///
    /// The reply is drawn uniformly at random from the matching rule's
    /// candidate set on every call, so repeated identical prompts may get
    /// different replies.
    pub fn reply(&self, prompt: &str, rng: &mut impl Rng) -> Option<String> {
        self.find(prompt)
            .and_then(|rule| rule.replies.choose(rng))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rule(pattern: &str, replies: &[&str]) -> GreetingRule {
        GreetingRule::new(pattern, replies.iter().map(|r| r.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_rule_requires_at_least_one_reply() {
        let err = GreetingRule::new(r"\bhi\b", Vec::new()).unwrap_err();
        assert!(matches!(err, RuleError::NoReplies { .. }));
    }

    #[test]
    fn test_rule_rejects_invalid_pattern() {
        let err = GreetingRule::new(r"(unclosed", vec!["reply".to_string()]).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }

    #[test]
    fn test_rule_debug_shows_pattern() {
        let rule = rule(r"\bhi\b", &["yo"]);
        let rendered = format!("{rule:?}");
        assert!(rendered.contains("hi"));
    }

    #[test]
    fn test_find_returns_first_matching_rule() {
        // Both patterns match "hello friend"; the earlier rule must win
        // even though the later pattern is more specific.
        let table = GreetingTable::new(vec![
            rule(r"\bhello\b", &["first"]),
            rule(r"\bhello friend\b", &["second"]),
        ]);
        let matched = table.find("hello friend").unwrap();
        assert_eq!(matched.pattern(), r"\bhello\b");
    }

    #[test]
    fn test_find_lowercases_prompt() {
        let table = GreetingTable::new(vec![rule(r"\bhello\b", &["hi"])]);
        assert!(table.find("HELLO THERE").is_some());
        assert!(table.find("Hello there").is_some());
    }

    #[test]
    fn test_find_no_match_returns_none() {
        let table = GreetingTable::new(vec![rule(r"\bhello\b", &["hi"])]);
        for _ in 0..10 {
            assert!(table.find("tell me about rust").is_none());
        }
    }

    #[test]
    fn test_reply_comes_from_matching_rule() {
        let table = GreetingTable::new(vec![
            rule(r"\bhello\b", &["a", "b", "c"]),
            rule(r"\bbye\b", &["x"]),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let reply = table.reply("hello", &mut rng).unwrap();
            assert!(["a", "b", "c"].contains(&reply.as_str()));
        }
    }

    #[test]
    fn test_reply_none_when_no_rule_matches() {
        let table = GreetingTable::new(vec![rule(r"\bhello\b", &["hi"])]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(table.reply("what is the weather", &mut rng).is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = GreetingTable::default();
        assert!(table.is_empty());
        assert!(table.find("hello").is_none());
    }
}
