//! [`Prompt`] for the Gemini [`generateContent` API]. A prompt is built from a
//! [`Topic`] by expanding a fixed instruction template.
//!
//! [`generateContent` API]: <https://ai.google.dev/api/generate-content>

use serde::{Deserialize, Serialize};

use crate::Topic;

/// Instruction template for a Wikipedia-style article. The `{topic}`
/// placeholder is replaced verbatim with the topic text.
const TEMPLATE: &str = "\
Write a comprehensive, encyclopedic article about {topic} in the style of Wikipedia.
The article should include:
1. An introductory overview
2. Detailed history and background
3. Key characteristics or attributes
4. Significance or impact
5. Relevant subsections as appropriate
6. Neutral, academic tone
7. Properly formatted with clear sections

Topic: {topic}
";

/// A fully composed instruction string for the generation service.
///
/// Building a prompt is pure and deterministic: the same [`Topic`] always
/// yields a byte-identical prompt. The topic is inserted verbatim, once at the
/// instruction site and once on the trailing `Topic:` line. There is no
/// failure mode.
#[derive(
    Debug,
    Clone,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Deref,
)]
#[cfg_attr(any(feature = "partial-eq", test), derive(PartialEq))]
#[display("{_0}")]
pub struct Prompt(String);

impl Prompt {
    /// Build the instruction prompt for a Wikipedia-style article about
    /// `topic`.
    pub fn for_topic(topic: &Topic) -> Self {
        Self(TEMPLATE.replace("{topic}", topic.as_str()))
    }

    /// The prompt as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Topic> for Prompt {
    fn from(topic: &Topic) -> Self {
        Self::for_topic(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_topic_twice() {
        let topic = Topic::new("Quantum Computing").unwrap();
        let prompt = Prompt::for_topic(&topic);

        assert_eq!(prompt.matches("Quantum Computing").count(), 2);
        assert!(prompt.ends_with("Topic: Quantum Computing\n"));
    }

    #[test]
    fn test_prompt_outline() {
        let topic = Topic::new("Ada Lovelace").unwrap();
        let prompt = Prompt::for_topic(&topic);

        for keyword in [
            "overview",
            "history",
            "characteristics",
            "Significance",
            "subsections",
            "Neutral, academic tone",
        ] {
            assert!(
                prompt.contains(keyword),
                "prompt is missing {:?}",
                keyword
            );
        }
    }

    #[test]
    fn test_prompt_deterministic() {
        let topic = Topic::new("Rust (programming language)").unwrap();
        assert_eq!(Prompt::for_topic(&topic), Prompt::for_topic(&topic));
    }

    #[test]
    fn test_prompt_verbatim_insertion() {
        // No escaping is performed. A topic that happens to contain template
        // syntax is inserted as-is.
        let topic = Topic::new("{topic} & <b>html</b>").unwrap();
        let prompt = Prompt::for_topic(&topic);
        assert!(prompt.contains("about {topic} & <b>html</b> in the style"));
    }
}
