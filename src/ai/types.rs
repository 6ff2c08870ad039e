use crate::models::{Listing, SpotType};
use serde::{Deserialize, Serialize};

pub const DEFAULT_VIBE: &str = "Peaceful and safe";

/// One listing as the ranking model sees it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingSummary {
    pub id: String,
    pub desc: String,
}

impl From<&Listing> for ListingSummary {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            desc: listing.summary_text(),
        }
    }
}

/// Query plus the candidate listings sent upstream
#[derive(Debug, Clone, Serialize)]
pub struct RankingRequest {
    pub query: String,
    pub listings: Vec<ListingSummary>,
}

impl RankingRequest {
    pub fn new(query: &str, listings: &[Listing]) -> Self {
        Self {
            query: query.to_string(),
            listings: listings.iter().map(ListingSummary::from).collect(),
        }
    }
}

/// Structured answer expected back from the ranking model
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RankedIds {
    pub ids: Vec<String>,
}

/// Inputs for description generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRequest {
    pub location: String,
    pub spot_type: SpotType,
    /// Amenity labels, not ids
    pub features: Vec<String>,
    pub vibe: String,
}

impl DescriptionRequest {
    pub fn new(
        location: impl Into<String>,
        spot_type: SpotType,
        features: Vec<String>,
        vibe: Option<&str>,
    ) -> Self {
        let vibe = match vibe.map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => DEFAULT_VIBE.to_string(),
        };

        Self {
            location: location.into(),
            spot_type,
            features,
            vibe,
        }
    }
}
