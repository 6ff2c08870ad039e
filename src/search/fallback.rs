use crate::models::Listing;

/// Case-insensitive substring match over title, description and location.
///
/// Keeps the input order; this is a safety net, not a ranking.
pub fn fallback_match(query: &str, listings: &[Listing]) -> Vec<Listing> {
    let needle = query.to_lowercase();

    listings
        .iter()
        .filter(|l| {
            l.title.to_lowercase().contains(&needle)
                || l.description.to_lowercase().contains(&needle)
                || l.location.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
