use super::{Amenity, Listing, SpotType};

/// Fixed set of amenities a host can offer
pub static AMENITIES: [Amenity; 7] = [
    Amenity {
        id: "water",
        label: "Potable Water",
        icon: "💧",
    },
    Amenity {
        id: "electric",
        label: "Electric Hookup",
        icon: "⚡",
    },
    Amenity {
        id: "wifi",
        label: "Wi-Fi",
        icon: "📶",
    },
    Amenity {
        id: "waste",
        label: "Waste Disposal",
        icon: "🗑️",
    },
    Amenity {
        id: "pets",
        label: "Pet Friendly",
        icon: "🐾",
    },
    Amenity {
        id: "fire",
        label: "Campfire Allowed",
        icon: "🔥",
    },
    Amenity {
        id: "toilet",
        label: "Toilet Access",
        icon: "🚽",
    },
];

pub fn amenity(id: &str) -> Option<&'static Amenity> {
    AMENITIES.iter().find(|a| a.id == id)
}

/// Resolve amenity ids against the catalog, dropping unknown ones
pub fn resolve_amenities<S: AsRef<str>>(ids: &[S]) -> Vec<&'static Amenity> {
    ids.iter().filter_map(|id| amenity(id.as_ref())).collect()
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    title: &str,
    description: &str,
    location: &str,
    price_per_night: f64,
    image_seed: &str,
    amenities: &[&str],
    host_name: &str,
    rating: f64,
    spot_type: SpotType,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        price_per_night,
        spot_type,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        host_name: host_name.to_string(),
        rating,
        image_seed: image_seed.to_string(),
    }
}

/// Demo spots loaded into the store at startup
pub fn seed_listings() -> Vec<Listing> {
    vec![
        seed(
            "1",
            "Secluded Forest Clearing",
            "A peaceful spot deep in the woods. Perfect for nature lovers who want total privacy. Wake up to the sound of birds and rustling leaves. No amenities, just pure nature.",
            "Oregon, USA",
            25.0,
            "forest-camp",
            &["pets", "fire"],
            "Sarah J.",
            4.8,
            SpotType::Forest,
        ),
        seed(
            "2",
            "Sunny Coastal Driveway",
            "Park your van safely in our paved driveway. We are just a 5-minute walk from the beach. Includes access to a garden hose for water and outdoor power outlet.",
            "California, USA",
            45.0,
            "beach-van",
            &["water", "electric", "wifi"],
            "Mike T.",
            4.5,
            SpotType::Driveway,
        ),
        seed(
            "3",
            "Old Oak Farm Meadow",
            "Large grassy meadow on a working farm. Fresh eggs available in the morning! Lots of space for kids and pets to run around. We have a compost toilet available.",
            "Vermont, USA",
            30.0,
            "farm-meadow",
            &["water", "pets", "toilet"],
            "Farmer Bill",
            4.9,
            SpotType::Farm,
        ),
        seed(
            "4",
            "Urban Oasis Parking",
            "Secure gated parking in the city center. Perfect base for exploring the museums and nightlife. High-speed Wi-Fi reaches the spot.",
            "Austin, TX",
            50.0,
            "city-parking",
            &["wifi", "electric", "waste"],
            "Elena R.",
            4.2,
            SpotType::Driveway,
        ),
        seed(
            "5",
            "Mountain View Ridge",
            "Stunning panoramic views of the Rockies. Flat gravel pad suitable for larger RVs. Windy but worth it for the sunset.",
            "Colorado, USA",
            35.0,
            "mountain-view",
            &["pets", "fire"],
            "Alex P.",
            4.7,
            SpotType::Field,
        ),
        seed(
            "6",
            "Lakeside Retreat",
            "Right on the edge of a private lake. Bring your kayak! Very quiet area, strict noise curfew after 10pm to preserve the tranquility.",
            "Michigan, USA",
            40.0,
            "lake-side",
            &["water", "fire", "pets"],
            "Grandpa Joe",
            4.6,
            SpotType::Forest,
        ),
    ]
}
