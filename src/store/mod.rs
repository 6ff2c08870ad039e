use crate::models::{seed_listings, Listing};
use tracing::debug;

/// In-memory listing collection, most recent first.
///
/// Lives for one session. Id uniqueness is the caller's job; `insert` does
/// no validation.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demo spots
    pub fn with_seed_data() -> Self {
        Self::from_listings(seed_listings())
    }

    /// Wrap an existing ordered collection as-is
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Add a listing as the new head of the collection
    pub fn insert(&mut self, listing: Listing) {
        debug!(id = %listing.id, "Inserting listing at head of store");
        self.listings.insert(0, listing);
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
