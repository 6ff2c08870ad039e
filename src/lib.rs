pub mod ai;
pub mod config;
pub mod host;
pub mod models;
pub mod search;
pub mod store;

pub use ai::{GeminiClient, RankingUnavailable};
pub use config::Config;
pub use host::{generate_description, publish_listing, HostDraft};
pub use models::{Amenity, Listing, SpotType};
pub use search::{SearchOrchestrator, SearchOutcome, SearchResults};
pub use store::ListingStore;
