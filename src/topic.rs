//! [`Topic`] is a validated, non-empty subject for article generation.

use serde::{Deserialize, Serialize};

/// Error for when a topic is empty or contains only whitespace.
#[derive(Debug, thiserror::Error)]
#[error("Topic must not be empty")]
pub struct EmptyTopic;

/// A non-empty subject string for article generation. Validation is a blank
/// check only; the value is otherwise stored verbatim.
///
/// Constructing a [`Topic`] up front means an empty subject can never reach
/// the generation client.
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
#[serde(try_from = "String")]
pub struct Topic(String);

impl Topic {
    /// Suffix appended to the suggested [`file_name`].
    ///
    /// [`file_name`]: Self::file_name
    pub const FILE_SUFFIX: &'static str = "_wiki.md";

    /// Create a new topic. Fails with [`EmptyTopic`] if the string is empty or
    /// whitespace only.
    pub fn new<S>(topic: S) -> Result<Self, EmptyTopic>
    where
        S: Into<String>,
    {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(EmptyTopic);
        }

        Ok(Self(topic))
    }

    /// The topic as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suggested file name for a downloaded article about this topic. Spaces
    /// are replaced with underscores and [`FILE_SUFFIX`] is appended, so the
    /// topic "Artificial Intelligence" becomes
    /// `Artificial_Intelligence_wiki.md`.
    ///
    /// [`FILE_SUFFIX`]: Self::FILE_SUFFIX
    pub fn file_name(&self) -> String {
        format!("{}{}", self.0.replace(' ', "_"), Self::FILE_SUFFIX)
    }
}

impl TryFrom<String> for Topic {
    type Error = EmptyTopic;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl std::str::FromStr for Topic {
    type Err = EmptyTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
