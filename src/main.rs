use anyhow::{Context, Result};
use campsite_scout::{
    generate_description, publish_listing, Config, GeminiClient, HostDraft, Listing, ListingStore,
    SearchOrchestrator, SearchOutcome, SpotType,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campsite-scout")]
#[command(about = "Find and host campervan parking spots")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List spots in the store, newest first
    List {
        /// Only show the first N spots
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the full details of one spot
    Show { id: String },

    /// Search spots with a natural-language query
    Search {
        query: String,
        /// Write the results as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Draft a description for a spot
    Describe {
        #[arg(long)]
        location: String,
        #[arg(long = "type", default_value = "Driveway")]
        spot_type: SpotType,
        /// Amenity id, repeatable
        #[arg(long = "amenity")]
        amenities: Vec<String>,
        #[arg(long)]
        vibe: Option<String>,
    },

    /// Publish a new spot and show the updated store
    Host {
        #[arg(long)]
        location: String,
        #[arg(long = "type", default_value = "Driveway")]
        spot_type: SpotType,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, default_value_t = 20.0)]
        price: f64,
        #[arg(long = "amenity")]
        amenities: Vec<String>,
        #[arg(long)]
        vibe: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Ask the model for a description before publishing
        #[arg(long)]
        generate: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    if !config.has_credentials() {
        warn!("No Gemini API key found, AI features will use their fallbacks");
    }

    let gemini = Arc::new(GeminiClient::new(&config)?);
    let mut store = ListingStore::with_seed_data();

    match cli.command {
        Commands::List { limit } => {
            let listings = store.all();
            let shown = limit.unwrap_or(listings.len()).min(listings.len());
            print_listings(&listings[..shown]);
        }

        Commands::Show { id } => println!("{}", show_listing(&store, &id)?),

        Commands::Search { query, output } => {
            let search = SearchOrchestrator::new(gemini.clone());
            let results = search.search_with_outcome(&query, store.all()).await;

            match results.outcome {
                SearchOutcome::Ranked => info!("Ranked by {}", gemini.model()),
                SearchOutcome::FallbackApplied => info!("Ranking unavailable, showing text matches"),
                SearchOutcome::Unfiltered => info!("Empty query, showing all spots"),
            }

            if results.is_empty() {
                println!("No spots match \"{}\".", query.trim());
            } else {
                print_listings(&results.listings);
            }

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&results)?;
                tokio::fs::write(&path, json)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("💾 Saved {} results to {}", results.len(), path.display());
            }
        }

        Commands::Describe {
            location,
            spot_type,
            amenities,
            vibe,
        } => {
            let draft = HostDraft {
                amenities,
                vibe: vibe.unwrap_or_default(),
                ..HostDraft::new(location, spot_type)
            };
            println!("{}", generate_description(gemini.as_ref(), &draft).await);
        }

        Commands::Host {
            location,
            spot_type,
            title,
            price,
            amenities,
            vibe,
            description,
            generate,
        } => {
            let mut draft = HostDraft {
                title: title.unwrap_or_default(),
                price_per_night: price,
                vibe: vibe.unwrap_or_default(),
                description: description.unwrap_or_default(),
                ..HostDraft::new(location, spot_type)
            };
            for id in &amenities {
                draft.toggle_amenity(id);
            }

            if generate {
                draft.description = generate_description(gemini.as_ref(), &draft).await;
            }

            let listing = publish_listing(&mut store, draft);
            info!("✅ Published {} ({})", listing.title, listing.id);
            print_listings(store.all());
        }
    }

    Ok(())
}

/// Detail view for one spot, or an error naming the missing id
fn show_listing(store: &ListingStore, id: &str) -> Result<String> {
    let listing = store
        .find_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("No spot with id \"{}\"", id))?;
    Ok(render_details(listing))
}

fn render_details(listing: &Listing) -> String {
    let mut lines = vec![
        listing.title.clone(),
        format!("{} · {}", listing.location, listing.spot_type.label()),
        format!(
            "${} / night · ★ {}",
            listing.price_per_night,
            listing.rating_label()
        ),
        format!("Hosted by {}", listing.host_name),
        String::new(),
        listing.description.clone(),
        String::new(),
    ];

    let amenities = listing.known_amenities();
    if amenities.is_empty() {
        lines.push("No listed amenities".to_string());
    } else {
        lines.push("What this place offers:".to_string());
        lines.extend(amenities.iter().map(|a| format!("  {} {}", a.icon, a.label)));
    }

    lines.push(String::new());
    lines.push(format!("Image: {}", listing.image_url(1200, 800)));
    lines.join("\n")
}

fn print_listings(listings: &[Listing]) {
    for (i, listing) in listings.iter().enumerate() {
        println!(
            "{}. {} (${}/night, ★ {})",
            i + 1,
            listing.title,
            listing.price_per_night,
            listing.rating_label()
        );
        println!("   {} · {}", listing.location, listing.spot_type.label());
        let amenities: Vec<String> = listing
            .known_amenities()
            .iter()
            .map(|a| format!("{} {}", a.icon, a.label))
            .collect();
        if !amenities.is_empty() {
            println!("   Amenities: {}", amenities.join(", "));
        }
        println!("   Host: {}", listing.host_name);
        println!("   ID: {}", listing.id);
        println!("   Image: {}", listing.image_url(600, 400));
        println!();
    }
}
