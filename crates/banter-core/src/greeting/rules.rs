//! Built-in greeting rules.
//!
//! Canned replies for the small talk a chat model handles poorly: plain
//! greetings, "how are you", and time-of-day salutations. Order matters --
//! earlier rules win over later ones.

use super::{GreetingRule, GreetingTable};

/// The built-in greeting table, in match-priority order.
pub fn builtin() -> GreetingTable {
    GreetingTable::new(vec![
        rule(
            r"\b(hi|hello|hey)\b",
            &[
                "Hello! How can I help you today?",
                "Hi there! What's on your mind?",
                "Hey! Nice to meet you.",
            ],
        ),
        rule(
            r"\bhow are you\b",
            &[
                "I'm doing well, thank you for asking! How are you?",
                "I'm great! How can I assist you today?",
                "I'm functioning perfectly! What can I help you with?",
            ],
        ),
        rule(
            r"\bgood morning\b",
            &[
                "Good morning! How can I make your day better?",
                "Good morning! I hope you're having a great start to your day.",
            ],
        ),
        rule(
            r"\bgood (evening|night)\b",
            &[
                "Good evening! How can I assist you?",
                "Good evening! What can I help you with?",
            ],
        ),
    ])
}

fn rule(pattern: &str, replies: &[&str]) -> GreetingRule {
    // The built-in patterns and reply sets are valid by construction.
    GreetingRule::new(pattern, replies.iter().map(|r| r.to_string()).collect())
        .expect("built-in greeting rule is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_rule_count() {
        assert_eq!(builtin().len(), 4);
    }

    #[test]
    fn test_casual_greetings_match_first_rule() {
        let table = builtin();
        let expected = [
            "Hello! How can I help you today?",
            "Hi there! What's on your mind?",
            "Hey! Nice to meet you.",
        ];
        let mut rng = StdRng::seed_from_u64(42);
        for prompt in ["hi", "Hello!", "hey there", "HELLO"] {
            let reply = table.reply(prompt, &mut rng).unwrap();
            assert!(
                expected.contains(&reply.as_str()),
                "unexpected reply {reply:?} for prompt {prompt:?}"
            );
        }
    }

    #[test]
    fn test_word_boundaries_are_respected() {
        let table = builtin();
        // "highway" and "this" contain "hi" but not on a word boundary.
        assert!(table.find("this highway is long").is_none());
        assert!(table.find("the theyre mark").is_none());
    }

    #[test]
    fn test_how_are_you_matches_second_rule() {
        let table = builtin();
        let matched = table.find("so, how are you doing?").unwrap();
        assert_eq!(matched.pattern(), r"\bhow are you\b");
        assert_eq!(matched.replies().len(), 3);
    }

    #[test]
    fn test_time_of_day_rules() {
        let table = builtin();
        assert_eq!(
            table.find("good morning to you").unwrap().pattern(),
            r"\bgood morning\b"
        );
        assert_eq!(
            table.find("good evening").unwrap().pattern(),
            r"\bgood (evening|night)\b"
        );
        assert_eq!(
            table.find("good night").unwrap().pattern(),
            r"\bgood (evening|night)\b"
        );
    }

    #[test]
    fn test_overlapping_prompt_takes_earlier_rule() {
        // "hi, how are you?" matches both the casual rule and the
        // "how are you" rule; declaration order decides.
        let table = builtin();
        let matched = table.find("hi, how are you?").unwrap();
        assert_eq!(matched.pattern(), r"\b(hi|hello|hey)\b");
    }

    #[test]
    fn test_non_greeting_prompts_fall_through() {
        let table = builtin();
        for prompt in [
            "tell me about rust",
            "what is the capital of France?",
            "goodbye",
        ] {
            assert!(table.find(prompt).is_none(), "{prompt:?} should not match");
        }
    }
}
