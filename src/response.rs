//! [`Response`] types for the [Gemini `generateContent` API].
//!
//! [Gemini `generateContent` API]: <https://ai.google.dev/api/generate-content>

use serde::{Deserialize, Serialize};

use crate::request::Content;

/// Successful response from the [Gemini `generateContent` API].
///
/// [Gemini `generateContent` API]: <https://ai.google.dev/api/generate-content>
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(any(feature = "partial-eq", test), derive(PartialEq))]
pub struct Response {
    /// Generated [`Candidate`]s. The API returns one unless a candidate count
    /// is requested.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token accounting for the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<Usage>,
    /// Model version that produced the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl Response {
    /// The text of the first candidate, if the response contains any. This is
    /// the article payload for a generation request.
    pub fn text(&self) -> Option<&str> {
        self.candidates.first().and_then(|c| c.content.text())
    }

    /// Consume the response, returning the text of the first candidate.
    pub fn into_text(self) -> Option<String> {
        self.candidates.into_iter().next().and_then(|c| {
            c.content
                .parts
                .into_iter()
                .next()
                .and_then(|p| p.text().map(ToOwned::to_owned))
        })
    }
}

/// A generated candidate.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(any(feature = "partial-eq", test), derive(PartialEq))]
pub struct Candidate {
    /// The generated [`Content`].
    pub content: Content<'static>,
    /// Why generation stopped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
    /// Index of the candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// Reason a [`Candidate`] stopped generating.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    derive_more::IsVariant,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    /// Natural stop point.
    Stop,
    /// The token limit was reached. The article is truncated.
    MaxTokens,
    /// The candidate was flagged for safety.
    Safety,
    /// The candidate was flagged for recitation of training data.
    Recitation,
    /// Any reason this crate does not know about.
    #[serde(other)]
    Other,
}

/// Token accounting for a request.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(any(feature = "partial-eq", test), derive(PartialEq))]
pub struct Usage {
    /// Tokens in the prompt.
    #[serde(default)]
    pub prompt_token_count: u32,
    /// Tokens across all candidates.
    #[serde(default)]
    pub candidates_token_count: u32,
    /// Total tokens billed.
    #[serde(default)]
    pub total_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE_JSON: &str = r#"{
  "candidates": [
    {
      "content": {
        "role": "model",
        "parts": [{ "text": "ARTICLE_BODY" }]
      },
      "finishReason": "STOP",
      "index": 0
    }
  ],
  "usageMetadata": {
    "promptTokenCount": 42,
    "candidatesTokenCount": 7,
    "totalTokenCount": 49
  }
}"#;

    #[test]
    fn test_response_text() {
        let response: Response = serde_json::from_str(RESPONSE_JSON).unwrap();
        assert_eq!(response.text(), Some("ARTICLE_BODY"));
        assert_eq!(
            response.candidates[0].finish_reason,
            Some(FinishReason::Stop)
        );
        assert_eq!(response.usage_metadata.as_ref().unwrap().total_token_count, 49);
        assert_eq!(response.into_text().unwrap(), "ARTICLE_BODY");
    }

    #[test]
    fn test_response_no_candidates() {
        let response: Response = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);
        assert_eq!(response.into_text(), None);
    }

    #[test]
    fn test_finish_reason_unknown() {
        let reason: FinishReason =
            serde_json::from_str(r#""MALFORMED_FUNCTION_CALL""#).unwrap();
        assert!(reason.is_other());
    }
}
