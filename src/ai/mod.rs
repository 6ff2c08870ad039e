pub mod error;
pub mod gemini;
pub mod traits;
pub mod types;

pub use error::{DescriptionGenerationFailed, GeminiError, RankingUnavailable};
pub use gemini::GeminiClient;
pub use traits::{DescriptionService, RankingService};
pub use types::{DescriptionRequest, ListingSummary, RankedIds, RankingRequest, DEFAULT_VIBE};

#[cfg(test)]
pub mod mock;
