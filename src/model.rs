//! [`Model`] to use for generation.
use serde::{Deserialize, Serialize};

/// Gemini model to use for generation. The REST API addresses models by name,
/// so the serialized form matches the `models/{name}` path segment.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    /// Gemini Pro. This is the default model.
    #[default]
    #[serde(rename = "gemini-pro")]
    GeminiPro,
    /// Gemini 1.5 Pro
    #[serde(rename = "gemini-1.5-pro")]
    Gemini15Pro,
    /// Gemini 1.5 Flash
    #[serde(rename = "gemini-1.5-flash")]
    Gemini15Flash,
    /// Gemini 2.0 Flash
    #[serde(rename = "gemini-2.0-flash")]
    Gemini20Flash,
}

impl Model {
    /// Get the REST API name of the model.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GeminiPro => "gemini-pro",
            Self::Gemini15Pro => "gemini-1.5-pro",
            Self::Gemini15Flash => "gemini-1.5-flash",
            Self::Gemini20Flash => "gemini-2.0-flash",
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for when a model name is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("Unknown model: {0}")]
pub struct UnknownModel(pub String);

impl std::str::FromStr for Model {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini-pro" => Ok(Self::GeminiPro),
            "gemini-1.5-pro" => Ok(Self::Gemini15Pro),
            "gemini-1.5-flash" => Ok(Self::Gemini15Flash),
            "gemini-2.0-flash" => Ok(Self::Gemini20Flash),
            _ => Err(UnknownModel(s.to_string())),
        }
    }
}
