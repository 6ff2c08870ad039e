//! Error types for the generative AI adapters.

use thiserror::Error;

/// Transport-level failures talking to Gemini.
///
/// These never leave the `ai` module; the service traits collapse them into
/// [`RankingUnavailable`] or [`DescriptionGenerationFailed`].
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Missing API key or invalid settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failed or timed out
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("API error: {0}")]
    Api(String),

    /// Response body or model output did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Ranking could not be obtained, for whatever reason.
///
/// The reason is for logs only. Callers treat every cause the same way.
#[derive(Debug, Error)]
#[error("Ranking unavailable: {reason}")]
pub struct RankingUnavailable {
    pub reason: String,
}

impl RankingUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<GeminiError> for RankingUnavailable {
    fn from(err: GeminiError) -> Self {
        Self::new(err.to_string())
    }
}

/// Draft description could not be generated.
#[derive(Debug, Error)]
pub enum DescriptionGenerationFailed {
    #[error("No API key configured")]
    MissingCredentials,

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Description request failed: {0}")]
    Failed(String),
}

impl DescriptionGenerationFailed {
    /// Human-readable text shown in place of a generated description
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "API Key missing. Please provide a description manually.",
            Self::EmptyResponse => "Could not generate description.",
            Self::Failed(_) => "Error generating description. Please try again.",
        }
    }
}

impl From<GeminiError> for DescriptionGenerationFailed {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Config(_) => Self::MissingCredentials,
            other => Self::Failed(other.to_string()),
        }
    }
}
