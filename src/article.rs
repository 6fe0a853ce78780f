//! [`Article`] is the generated text payload for a [`Topic`].

use serde::{Deserialize, Serialize};

use crate::Topic;

/// A generated Wikipedia-style article. Owns the raw markdown text returned by
/// the service together with the [`Topic`] it answers. Nothing is persisted;
/// the article lives only as long as the caller keeps it.
#[derive(Debug, Clone, Serialize, Deserialize, derive_more::Display)]
#[cfg_attr(any(feature = "partial-eq", test), derive(PartialEq))]
#[display("{text}")]
pub struct Article {
    /// The topic the article is about.
    pub topic: Topic,
    /// The raw markdown text, unmodified from the service response.
    pub text: String,
}

impl Article {
    /// Create an article from a topic and the service's text payload.
    pub fn new(topic: Topic, text: String) -> Self {
        Self { topic, text }
    }

    /// The article text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Suggested file name for saving the article as markdown. Delegates to
    /// [`Topic::file_name`].
    pub fn file_name(&self) -> String {
        self.topic.file_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_file_name() {
        let topic = Topic::new("Artificial Intelligence").unwrap();
        let article = Article::new(topic, "body".to_string());
        assert_eq!(article.file_name(), "Artificial_Intelligence_wiki.md");
    }

    #[test]
    fn test_article_display_is_text() {
        let topic = Topic::new("Rust").unwrap();
        let article = Article::new(topic, "# Rust\n\nA language.".to_string());
        assert_eq!(article.to_string(), "# Rust\n\nA language.");
        assert_eq!(article.text(), "# Rust\n\nA language.");
    }
}
