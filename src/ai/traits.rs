use crate::ai::error::{DescriptionGenerationFailed, RankingUnavailable};
use crate::ai::types::DescriptionRequest;
use crate::models::Listing;
use async_trait::async_trait;

/// Semantic ranking of listings against a free-text query.
/// Implementations must not retry; a failed call is reported right away.
#[async_trait]
pub trait RankingService: Send + Sync {
    /// Listing ids, most relevant first. `query` is never blank.
    async fn rank(&self, query: &str, listings: &[Listing])
        -> Result<Vec<String>, RankingUnavailable>;

    /// Get the name of the ranking backend
    fn name(&self) -> &'static str;
}

/// Draft copy for a new listing
#[async_trait]
pub trait DescriptionService: Send + Sync {
    async fn describe(
        &self,
        request: &DescriptionRequest,
    ) -> Result<String, DescriptionGenerationFailed>;
}
