//! Host flow: drafting, describing and publishing a new spot.

use crate::ai::{DescriptionRequest, DescriptionService};
use crate::models::{resolve_amenities, Listing, SpotType};
use crate::store::ListingStore;
use chrono::Utc;
use tracing::{info, warn};

pub const DEFAULT_PRICE_PER_NIGHT: f64 = 20.0;
pub const DEFAULT_HOST_NAME: &str = "You";

/// Form state for a listing that has not been published yet
#[derive(Debug, Clone, PartialEq)]
pub struct HostDraft {
    pub title: String,
    pub location: String,
    pub spot_type: SpotType,
    pub price_per_night: f64,
    pub amenities: Vec<String>,
    pub vibe: String,
    pub description: String,
    pub host_name: String,
}

impl Default for HostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            spot_type: SpotType::default(),
            price_per_night: DEFAULT_PRICE_PER_NIGHT,
            amenities: Vec::new(),
            vibe: String::new(),
            description: String::new(),
            host_name: DEFAULT_HOST_NAME.to_string(),
        }
    }
}

impl HostDraft {
    pub fn new(location: impl Into<String>, spot_type: SpotType) -> Self {
        Self {
            location: location.into(),
            spot_type,
            ..Self::default()
        }
    }

    /// Add the amenity if absent, remove it if present
    pub fn toggle_amenity(&mut self, id: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == id) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(id.to_string());
        }
    }

    /// Catalog labels for the selected amenities
    pub fn amenity_labels(&self) -> Vec<String> {
        resolve_amenities(&self.amenities)
            .into_iter()
            .map(|a| a.label.to_string())
            .collect()
    }

    pub fn display_title(&self) -> String {
        if self.title.trim().is_empty() {
            format!("{} in {}", self.spot_type, self.location)
        } else {
            self.title.clone()
        }
    }
}

/// Draft a description for the spot. Always yields usable text.
pub async fn generate_description(service: &dyn DescriptionService, draft: &HostDraft) -> String {
    let request = DescriptionRequest::new(
        draft.location.clone(),
        draft.spot_type,
        draft.amenity_labels(),
        Some(&draft.vibe),
    );

    match service.describe(&request).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Description generation failed, using placeholder");
            e.placeholder().to_string()
        }
    }
}

/// Publish a draft as a new listing at the head of the store
pub fn publish_listing(store: &mut ListingStore, draft: HostDraft) -> Listing {
    let id = next_listing_id(store, Utc::now().timestamp_millis());

    let mut amenities: Vec<String> = Vec::with_capacity(draft.amenities.len());
    for a in draft.amenities.iter() {
        if !amenities.contains(a) {
            amenities.push(a.clone());
        }
    }

    let price_per_night = if draft.price_per_night.is_finite() && draft.price_per_night > 0.0 {
        draft.price_per_night
    } else {
        0.0
    };

    let listing = Listing {
        title: draft.display_title(),
        image_seed: format!("host-{}", id),
        id,
        description: draft.description,
        location: draft.location,
        price_per_night,
        spot_type: draft.spot_type,
        amenities,
        host_name: draft.host_name,
        rating: 0.0,
    };

    info!(id = %listing.id, title = %listing.title, "Published listing");
    store.insert(listing.clone());
    listing
}

/// Timestamp-derived id, bumped until it is free in the store
fn next_listing_id(store: &ListingStore, now_millis: i64) -> String {
    let mut candidate = now_millis;
    while store.contains(&candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
