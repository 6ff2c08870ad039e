pub mod catalog;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use catalog::{amenity, resolve_amenities, seed_listings, AMENITIES};

/// Kind of land a spot sits on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SpotType {
    #[default]
    Driveway,
    Field,
    Forest,
    Farm,
}

impl SpotType {
    pub const ALL: [SpotType; 4] = [
        SpotType::Driveway,
        SpotType::Field,
        SpotType::Forest,
        SpotType::Farm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpotType::Driveway => "Driveway",
            SpotType::Field => "Field",
            SpotType::Forest => "Forest",
            SpotType::Farm => "Farm",
        }
    }

    /// Label shown in the host form
    pub fn label(&self) -> &'static str {
        match self {
            SpotType::Driveway => "Driveway",
            SpotType::Field => "Field / Meadow",
            SpotType::Forest => "Forest",
            SpotType::Farm => "Farm Land",
        }
    }
}

impl fmt::Display for SpotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpotType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SpotType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow::anyhow!("Unknown spot type: {}", s))
    }
}

/// Static amenity reference entry
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Amenity {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// A parking spot offered by a host.
///
/// Never mutated after creation. `rating == 0.0` marks a newly published spot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price_per_night: f64,
    #[serde(rename = "type")]
    pub spot_type: SpotType,
    /// Amenity ids; ids missing from the catalog are skipped when displayed
    pub amenities: Vec<String>,
    pub host_name: String,
    pub rating: f64,
    pub image_seed: String,
}

impl Listing {
    /// Deterministic placeholder photo for this listing
    pub fn image_url(&self, width: u32, height: u32) -> String {
        format!(
            "https://picsum.photos/seed/{}/{}/{}",
            self.image_seed, width, height
        )
    }

    pub fn is_new(&self) -> bool {
        self.rating <= 0.0
    }

    pub fn rating_label(&self) -> String {
        if self.is_new() {
            "New".to_string()
        } else {
            self.rating.to_string()
        }
    }

    /// Catalog entries for the amenity ids this listing knows about
    pub fn known_amenities(&self) -> Vec<&'static Amenity> {
        resolve_amenities(&self.amenities)
    }

    /// Compact text handed to the ranking model.
    ///
    /// Price, host, rating and image seed are left out on purpose.
    pub fn summary_text(&self) -> String {
        format!(
            "{} - {} - {} - {} - Amenities: {}",
            self.title,
            self.description,
            self.location,
            self.spot_type,
            self.amenities.join(", ")
        )
    }
}
