use crate::models::SiteRecord;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::{debug, info};

const EFSERVICE_BASE: &str = "https://data.epa.gov/efservice";

/// Active Superfund sites for one state, as fetched from SEMS.
#[derive(Debug, Clone)]
pub struct StateSites {
    pub state: String,
    pub retrieved_at: DateTime<Utc>,
    pub sites: Vec<SiteRecord>,
}

/// Client for the EPA Envirofacts SEMS_ACTIVE_SITES table.
pub struct SemsClient {
    client: Client,
    base_url: String,
}

impl SemsClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("superfund-scout/0.1 (superfund site locator)")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: EFSERVICE_BASE.to_string(),
        })
    }

    /// Fetch every active site in the given state (two-letter code).
    /// One GET, no pagination; the table is small per state.
    pub async fn fetch_state_sites(&self, state_abbrev: &str) -> Result<StateSites> {
        let url = format!(
            "{}/SEMS_ACTIVE_SITES/SITE_STATE/CONTAINING/{}/JSON",
            self.base_url, state_abbrev
        );
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach the EPA sites registry")?;

        if !response.status().is_success() {
            anyhow::bail!("EPA sites registry returned status: {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read EPA response body")?;
        let sites = parse_sites(&body)?;

        let retrieved_at = Utc::now();
        info!(
            "Fetched {} active sites for {} at {}",
            sites.len(),
            state_abbrev,
            retrieved_at
        );

        Ok(StateSites {
            state: state_abbrev.to_string(),
            retrieved_at,
            sites,
        })
    }
}

/// Parse a SEMS JSON array into site records.
pub fn parse_sites(body: &str) -> Result<Vec<SiteRecord>> {
    serde_json::from_str(body).context("Failed to parse EPA sites response")
}

/// The API is loose about field types: SITE_ID shows up as a string or
/// a bare number depending on the row.
pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Coordinates arrive as numbers, numeric strings, empty strings, or
/// null. Anything that does not yield a number means the site has no
/// confirmed coordinates.
pub fn de_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCoord {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<RawCoord>::deserialize(deserializer)? {
        Some(RawCoord::Number(n)) => Some(n),
        Some(RawCoord::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
