//! Query-driven listing search.
//!
//! A blank query returns everything untouched. Otherwise the ranking service
//! is asked once; if it is unavailable the substring fallback is used instead.

pub mod fallback;

pub use fallback::fallback_match;

use crate::ai::RankingService;
use crate::models::Listing;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Which path produced a result set
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query, listings returned as given
    Unfiltered,
    /// Ordered by the ranking service
    Ranked,
    /// Ranking service unavailable, substring match applied
    FallbackApplied,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub listings: Vec<Listing>,
    pub outcome: SearchOutcome,
}

impl SearchResults {
    /// The "no results" state. Not an error.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }
}

/// Decides between ranked and fallback results
#[derive(Clone)]
pub struct SearchOrchestrator {
    ranker: Arc<dyn RankingService>,
}

impl SearchOrchestrator {
    pub fn new(ranker: Arc<dyn RankingService>) -> Self {
        Self { ranker }
    }

    pub async fn search(&self, query: &str, listings: &[Listing]) -> Vec<Listing> {
        self.search_with_outcome(query, listings).await.listings
    }

    pub async fn search_with_outcome(&self, query: &str, listings: &[Listing]) -> SearchResults {
        let query = query.trim();
        if query.is_empty() {
            debug!(total = listings.len(), "Blank query, returning all listings");
            return SearchResults {
                listings: listings.to_vec(),
                outcome: SearchOutcome::Unfiltered,
            };
        }

        match self.ranker.rank(query, listings).await {
            Ok(ids) => {
                let ranked = resolve_ranked_ids(&ids, listings);
                info!(
                    query = %query,
                    ranker = self.ranker.name(),
                    returned_ids = ids.len(),
                    results = ranked.len(),
                    "Ranked search complete"
                );
                SearchResults {
                    listings: ranked,
                    outcome: SearchOutcome::Ranked,
                }
            }
            Err(e) => {
                warn!(query = %query, reason = %e.reason, "Ranking unavailable, using text match");
                let matched = fallback_match(query, listings);
                info!(query = %query, results = matched.len(), "Fallback search complete");
                SearchResults {
                    listings: matched,
                    outcome: SearchOutcome::FallbackApplied,
                }
            }
        }
    }
}

/// Map ranked ids back to listings in the order received.
///
/// Unknown ids are dropped. Listings the ranker left out are not appended.
pub fn resolve_ranked_ids(ids: &[String], listings: &[Listing]) -> Vec<Listing> {
    let resolved: Vec<Listing> = ids
        .iter()
        .filter_map(|id| listings.iter().find(|l| &l.id == id))
        .cloned()
        .collect();

    let dropped = ids.len() - resolved.len();
    if dropped > 0 {
        debug!(dropped, "Ignoring ranked ids with no matching listing");
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::MockRanker;
    use crate::models::{seed_listings, SpotType};

    fn ids(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    fn forest_and_coast() -> Vec<Listing> {
        seed_listings().into_iter().take(2).collect()
    }

    #[tokio::test]
    async fn test_blank_query_returns_input_unchanged() {
        let ranker = MockRanker::returning(&["2"]);
        let search = SearchOrchestrator::new(Arc::new(ranker.clone()));
        let listings = seed_listings();

        for query in ["", "   ", "\t\n"] {
            let results = search.search_with_outcome(query, &listings).await;
            assert_eq!(results.listings, listings);
            assert_eq!(results.outcome, SearchOutcome::Unfiltered);
        }
        assert_eq!(ranker.call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_query_is_idempotent() {
        let search = SearchOrchestrator::new(Arc::new(MockRanker::unavailable()));
        let listings = seed_listings();

        let first = search.search("", &listings).await;
        let second = search.search("", &listings).await;
        assert_eq!(first, second);
        assert_eq!(listings, seed_listings());
    }

    #[tokio::test]
    async fn test_ranked_order_is_followed() {
        let search = SearchOrchestrator::new(Arc::new(MockRanker::returning(&["2", "1"])));
        let results = search.search_with_outcome("forest", &forest_and_coast()).await;

        assert_eq!(ids(&results.listings), vec!["2", "1"]);
        assert_eq!(results.outcome, SearchOutcome::Ranked);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_dropped() {
        let search = SearchOrchestrator::new(Arc::new(MockRanker::returning(&["3", "ghost", "1"])));
        let results = search.search("farm", &seed_listings()).await;

        assert_eq!(ids(&results), vec!["3", "1"]);
    }

    #[tokio::test]
    async fn test_empty_ranking_means_no_results() {
        let search = SearchOrchestrator::new(Arc::new(MockRanker::returning(&[])));
        let results = search.search_with_outcome("space station", &seed_listings()).await;

        assert!(results.is_empty());
        assert_eq!(results.outcome, SearchOutcome::Ranked);
    }

    #[tokio::test]
    async fn test_unavailable_ranker_falls_back() {
        let search = SearchOrchestrator::new(Arc::new(MockRanker::unavailable()));
        let results = search.search_with_outcome("forest", &forest_and_coast()).await;

        assert_eq!(ids(&results.listings), vec!["1"]);
        assert_eq!(results.outcome, SearchOutcome::FallbackApplied);
    }

    #[tokio::test]
    async fn test_fallback_matches_substring_search() {
        let search = SearchOrchestrator::new(Arc::new(MockRanker::unavailable()));
        let listings = seed_listings();

        for query in ["usa", "Quiet", "farm", "nothing like this"] {
            let results = search.search(query, &listings).await;
            assert_eq!(results, fallback_match(query, &listings), "query {:?}", query);
        }
    }

    #[tokio::test]
    async fn test_query_is_trimmed_before_ranking() {
        let ranker = MockRanker::returning(&["1"]);
        let search = SearchOrchestrator::new(Arc::new(ranker.clone()));
        search.search("  forest  ", &seed_listings()).await;

        assert_eq!(ranker.calls(), vec!["forest"]);
    }

    #[tokio::test]
    async fn test_newly_added_listing_can_be_ranked() {
        let mut listings = forest_and_coast();
        listings.push(Listing {
            id: "9".to_string(),
            title: "Orchard Field".to_string(),
            description: String::new(),
            location: "Ohio".to_string(),
            price_per_night: 15.0,
            spot_type: SpotType::Field,
            amenities: vec![],
            host_name: "You".to_string(),
            rating: 0.0,
            image_seed: "host-9".to_string(),
        });

        let search = SearchOrchestrator::new(Arc::new(MockRanker::returning(&["9", "2"])));
        assert_eq!(ids(&search.search("field", &listings).await), vec!["9", "2"]);
    }
}
