use crate::models::GeoPoint;
use crate::sources::traits::Geocoder;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Forward geocoder backed by the public Nominatim instance.
pub struct NominatimGeocoder {
    client: Client,
}

/// One search result row. Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimGeocoder {
    pub fn new() -> Result<Self> {
        // Nominatim's usage policy requires an identifying user agent.
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("superfund-scout/0.1 (superfund site locator)")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint> {
        debug!("Geocoding address: {}", address);

        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[("q", address), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await
            .context("Failed to reach the geocoding service")?;

        if !response.status().is_success() {
            anyhow::bail!("Geocoding service returned status: {}", response.status());
        }

        let places: Vec<Place> = response
            .json()
            .await
            .context("Failed to parse geocoding response")?;

        let place = places
            .into_iter()
            .next()
            .context("No match for the entered address")?;

        debug!("Best match: {}", place.display_name);

        let latitude = place
            .lat
            .parse::<f64>()
            .context("Geocoding response carried a malformed latitude")?;
        let longitude = place
            .lon
            .parse::<f64>()
            .context("Geocoding response carried a malformed longitude")?;

        Ok(GeoPoint::new(latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_coordinates() {
        let body = r#"[{"lat": "39.9611755", "lon": "-82.9987942",
                        "display_name": "Columbus, Franklin County, Ohio, United States"}]"#;
        let places: Vec<Place> = serde_json::from_str(body).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat.parse::<f64>().unwrap(), 39.9611755);
        assert_eq!(places[0].lon.parse::<f64>().unwrap(), -82.9987942);
    }

    #[test]
    fn empty_result_array_parses_to_no_places() {
        let places: Vec<Place> = serde_json::from_str("[]").unwrap();
        assert!(places.is_empty());
    }
}
