mod config;
mod models;
mod pipeline;
mod sources;
mod states;

use anyhow::Result;
use clap::Parser;
use config::{Config, DEFAULT_RADIUS_MILES};
use pipeline::{map, ranking, report, AddressCollector};
use sources::{Geocoder, NominatimGeocoder, SemsClient};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Find active Superfund sites near a postal address.
#[derive(Debug, Parser)]
#[command(name = "superfund-scout")]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Search radius in miles (overrides the config file)
    #[arg(long)]
    radius: Option<f64>,

    /// Where to write the rendered map page
    #[arg(long, default_value = "superfund_map.html")]
    map_out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = Config::load_or_default(&args.config)?;
    let radius_miles = args
        .radius
        .or(config.radius_miles)
        .unwrap_or(DEFAULT_RADIUS_MILES);

    let address = AddressCollector::new(io::stdin().lock(), io::stdout()).collect()?;

    // Resolve the abbreviation before any network call so a bad state
    // name fails fast.
    let state_abbrev = states::abbreviation_for(&address.state)?;

    let geocoder = NominatimGeocoder::new()?;
    let origin = match geocoder.geocode(&address.to_string()).await {
        Ok(point) => point,
        Err(err) => {
            debug!("Geocoding failed: {err:#}");
            println!("Your address did not return a result. \n Program exiting.");
            anyhow::bail!("geocoding failed for the entered address");
        }
    };
    println!("\n Address verified: Connecting to EPA Database.");
    info!(
        "Address resolved to ({}, {})",
        origin.latitude, origin.longitude
    );

    let state_sites = SemsClient::new()?.fetch_state_sites(state_abbrev).await?;

    let nearby = ranking::rank_nearby(origin, state_sites.sites, radius_miles);
    if nearby.is_empty() {
        report::write_empty_notice(&mut io::stdout(), radius_miles)?;
        return Ok(());
    }

    report::write_report(&mut io::stdout(), &nearby, radius_miles)?;

    match config.maps_api_key.as_deref() {
        Some(api_key) => {
            let html = map::render_map(&nearby, api_key, state_sites.retrieved_at);
            map::write_map(&args.map_out, &html).await?;
            info!(
                "Wrote map with {} markers to {}",
                nearby.len(),
                args.map_out.display()
            );
        }
        None => warn!("No Google Maps API key configured; skipping the map render"),
    }

    Ok(())
}
