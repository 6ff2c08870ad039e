// Scripted stand-ins for the AI services, used by unit tests.

use crate::ai::error::{DescriptionGenerationFailed, RankingUnavailable};
use crate::ai::traits::{DescriptionService, RankingService};
use crate::ai::types::DescriptionRequest;
use crate::models::Listing;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// What the mock ranker answers with
#[derive(Debug, Clone)]
pub enum MockRanking {
    Ids(Vec<String>),
    Unavailable,
}

#[derive(Clone)]
pub struct MockRanker {
    response: MockRanking,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockRanker {
    pub fn returning(ids: &[&str]) -> Self {
        Self {
            response: MockRanking::Ids(ids.iter().map(|s| s.to_string()).collect()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            response: MockRanking::Unavailable,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queries the ranker was asked about
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RankingService for MockRanker {
    async fn rank(
        &self,
        query: &str,
        _listings: &[Listing],
    ) -> Result<Vec<String>, RankingUnavailable> {
        self.calls.lock().unwrap().push(query.to_string());

        match &self.response {
            MockRanking::Ids(ids) => Ok(ids.clone()),
            MockRanking::Unavailable => Err(RankingUnavailable::new("mock ranker offline")),
        }
    }

    fn name(&self) -> &'static str {
        "Mock"
    }
}

pub struct MockDescriber {
    response: Option<String>,
    requests: Arc<Mutex<Vec<DescriptionRequest>>>,
}

impl MockDescriber {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn last_request(&self) -> Option<DescriptionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl DescriptionService for MockDescriber {
    async fn describe(
        &self,
        request: &DescriptionRequest,
    ) -> Result<String, DescriptionGenerationFailed> {
        self.requests.lock().unwrap().push(request.clone());

        self.response
            .clone()
            .ok_or_else(|| DescriptionGenerationFailed::Failed("mock describer offline".into()))
    }
}
