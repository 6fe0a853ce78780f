//! [Gemini `generateContent` API] [`Request`] types.
//!
//! [Gemini `generateContent` API]: <https://ai.google.dev/api/generate-content>

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::Prompt;

/// Request body for the [Gemini `generateContent` API].
///
/// [Gemini `generateContent` API]: <https://ai.google.dev/api/generate-content>
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(any(feature = "partial-eq", test), derive(PartialEq))]
pub struct Request<'a> {
    /// Conversation [`Content`]s. Article generation is single-turn, so this
    /// is a single [`User`] content with one text [`Part`].
    ///
    /// [`User`]: Role::User
    pub contents: Vec<Content<'a>>,
    /// Optional sampling configuration. When absent the service defaults
    /// apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl<'a> Request<'a> {
    /// Create a single-turn request from a [`Prompt`], borrowing its text.
    pub fn from_prompt(prompt: &'a Prompt) -> Self {
        Self {
            contents: vec![Content::user(prompt.as_str())],
            generation_config: None,
        }
    }

    /// Set the [`generation_config`].
    ///
    /// [`generation_config`]: Request::generation_config
    pub fn generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

impl<'a> From<&'a Prompt> for Request<'a> {
    fn from(prompt: &'a Prompt) -> Self {
        Self::from_prompt(prompt)
    }
}

/// A role-tagged sequence of [`Part`]s.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(any(feature = "partial-eq", test), derive(PartialEq))]
pub struct Content<'a> {
    /// Who the content is from.
    pub role: Role,
    /// The pieces of the content. For text generation this is a single
    /// [`Part::Text`].
    pub parts: Vec<Part<'a>>,
}

impl<'a> Content<'a> {
    /// Create [`User`] content with a single text part.
    ///
    /// [`User`]: Role::User
    pub fn user<T>(text: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Self {
            role: Role::User,
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    /// The text of the first [`Part::Text`], if any.
    pub fn text(&self) -> Option<&str> {
        self.parts.iter().find_map(Part::text)
    }
}

/// Role of the [`Content`] author. The Gemini API uses `model`, not
/// `assistant`, for generated turns.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(any(feature = "partial-eq", test), derive(PartialEq))]
pub enum Role {
    /// From the user.
    #[display("user")]
    User,
    /// From the model.
    #[display("model")]
    Model,
}

/// One piece of [`Content`]. Only text parts are used for article generation.
#[derive(Debug, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(untagged)]
#[cfg_attr(any(feature = "partial-eq", test), derive(PartialEq))]
pub enum Part<'a> {
    /// A text part.
    Text {
        #[allow(missing_docs)]
        text: Cow<'a, str>,
    },
}

impl Part<'_> {
    /// The text if this is a [`Text`] part.
    ///
    /// [`Text`]: Part::Text
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
        }
    }
}

/// Sampling configuration, serialized camelCase per the wire format. All
/// fields are optional; the service default is used for any field left unset.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(any(feature = "partial-eq", test), derive(PartialEq))]
pub struct GenerationConfig {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Top P nucleus sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Top K tokens to consider for each token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// Max tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Topic;

    #[test]
    fn test_request_from_prompt() {
        let topic = Topic::new("Quantum Computing").unwrap();
        let prompt = Prompt::for_topic(&topic);
        let request = Request::from_prompt(&prompt);

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, Role::User);
        assert_eq!(request.contents[0].text(), Some(prompt.as_str()));
    }

    #[test]
    fn test_request_serialize() {
        let topic = Topic::new("X").unwrap();
        let prompt = Prompt::for_topic(&topic);
        let request = Request::from_prompt(&prompt);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            serde_json::Value::String(prompt.to_string())
        );
        assert_eq!(json["contents"][0]["role"], "user");
        // Unset generation config is omitted entirely.
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_generation_config_serialize() {
        let config = GenerationConfig {
            temperature: Some(0.7),
            max_output_tokens: Some(2048),
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["maxOutputTokens"], 2048);
        assert!(json.get("topK").is_none());
    }
}
