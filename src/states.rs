//! Full state/territory name to USPS abbreviation mapping.
//!
//! The SEMS API filters by the two-letter code while the address prompt
//! collects the full name, so every query goes through this table.

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

/// All 56 recognized names: 50 states, DC, and the five territories.
/// Keys are lower-case; use [`abbreviation_for`] rather than indexing
/// this map directly.
static STATE_ABBREVIATIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("alabama", "AL"),
        ("alaska", "AK"),
        ("american samoa", "AS"),
        ("arizona", "AZ"),
        ("arkansas", "AR"),
        ("california", "CA"),
        ("colorado", "CO"),
        ("connecticut", "CT"),
        ("delaware", "DE"),
        ("district of columbia", "DC"),
        ("florida", "FL"),
        ("georgia", "GA"),
        ("guam", "GU"),
        ("hawaii", "HI"),
        ("idaho", "ID"),
        ("illinois", "IL"),
        ("indiana", "IN"),
        ("iowa", "IA"),
        ("kansas", "KS"),
        ("kentucky", "KY"),
        ("louisiana", "LA"),
        ("maine", "ME"),
        ("maryland", "MD"),
        ("massachusetts", "MA"),
        ("michigan", "MI"),
        ("minnesota", "MN"),
        ("mississippi", "MS"),
        ("missouri", "MO"),
        ("montana", "MT"),
        ("nebraska", "NE"),
        ("nevada", "NV"),
        ("new hampshire", "NH"),
        ("new jersey", "NJ"),
        ("new mexico", "NM"),
        ("new york", "NY"),
        ("north carolina", "NC"),
        ("north dakota", "ND"),
        ("northern mariana islands", "MP"),
        ("ohio", "OH"),
        ("oklahoma", "OK"),
        ("oregon", "OR"),
        ("pennsylvania", "PA"),
        ("puerto rico", "PR"),
        ("rhode island", "RI"),
        ("south carolina", "SC"),
        ("south dakota", "SD"),
        ("tennessee", "TN"),
        ("texas", "TX"),
        ("utah", "UT"),
        ("vermont", "VT"),
        ("virgin islands", "VI"),
        ("virginia", "VA"),
        ("washington", "WA"),
        ("west virginia", "WV"),
        ("wisconsin", "WI"),
        ("wyoming", "WY"),
    ])
});

/// Look up the USPS abbreviation for a full state or territory name.
///
/// Input is trimmed and case-folded before lookup, so "  ohio " and
/// "OHIO" both resolve to "OH". An unknown name is an explicit error,
/// not a panic.
pub fn abbreviation_for(state: &str) -> Result<&'static str> {
    let key = state.trim().to_lowercase();
    match STATE_ABBREVIATIONS.get(key.as_str()).copied() {
        Some(abbrev) => Ok(abbrev),
        None => bail!("unrecognized state or territory name: {:?}", state.trim()),
    }
}
