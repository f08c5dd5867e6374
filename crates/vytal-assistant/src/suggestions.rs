//! Fixed follow-up suggestion lists.

use crate::topic::Topic;

/// Returns the three follow-up suggestions for a topic.
///
/// Total function over [`Topic`]; the lists never change at runtime.
pub fn follow_ups(topic: Topic) -> Vec<String> {
    let fixed: [&str; 3] = match topic {
        Topic::Cholesterol => [
            "How does fiber lower cholesterol?",
            "What about medications?",
            "Show me my APO-B result",
        ],
        Topic::Inflammation => [
            "How long until hs-CRP improves?",
            "What foods cause inflammation?",
            "Tell me about sleep and inflammation",
        ],
        Topic::Nutrition => [
            "What about breakfast?",
            "Can I have coffee?",
            "How much protein do I need?",
        ],
        Topic::Progress => [
            "How can I improve consistency?",
            "What if I miss a day?",
            "When should I retest?",
        ],
        Topic::General => [
            "Explain my cardiovascular risk",
            "What should I eat today?",
            "How am I progressing?",
        ],
    };

    fixed.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_three_suggestions() {
        for topic in [
            Topic::Cholesterol,
            Topic::Inflammation,
            Topic::Nutrition,
            Topic::Progress,
            Topic::General,
        ] {
            assert_eq!(follow_ups(topic).len(), 3);
        }
    }

    #[test]
    fn cholesterol_messages_get_the_cholesterol_list() {
        let suggestions = follow_ups(Topic::classify("my cholesterol worries me"));
        assert_eq!(
            suggestions,
            vec![
                "How does fiber lower cholesterol?",
                "What about medications?",
                "Show me my APO-B result",
            ]
        );
    }

    #[test]
    fn unmatched_messages_get_the_default_list() {
        let suggestions = follow_ups(Topic::classify("good morning"));
        assert_eq!(suggestions[0], "Explain my cardiovascular risk");
    }
}
