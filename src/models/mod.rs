use geo::{Distance, Geodesic, Point};
use serde::Deserialize;
use std::fmt;

const METERS_PER_MILE: f64 = 1_609.344;

/// A postal address as entered at the prompts. Free text, no validation
/// beyond the user confirming the assembled string by eye.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.street, self.city, self.state, self.zip)
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Geodesic distance to another point, in miles.
    pub fn distance_miles(&self, other: GeoPoint) -> f64 {
        let a = Point::new(self.longitude, self.latitude);
        let b = Point::new(other.longitude, other.latitude);
        Geodesic.distance(a, b) / METERS_PER_MILE
    }
}

/// One site row as returned by the SEMS active-sites API.
///
/// Coordinates are absent for sites proposed for the NPL but not yet
/// located, so they stay optional here; the custom deserializers in
/// `sources::sems` cope with the API mixing numbers, strings and nulls.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteRecord {
    #[serde(rename = "SITE_ID", deserialize_with = "crate::sources::sems::de_id")]
    pub site_id: String,
    #[serde(rename = "SITE_NAME")]
    pub name: String,
    #[serde(rename = "SITE_STATE")]
    pub state: String,
    #[serde(
        rename = "LATITUDE",
        default,
        deserialize_with = "crate::sources::sems::de_coord"
    )]
    pub latitude: Option<f64>,
    #[serde(
        rename = "LONGITUDE",
        default,
        deserialize_with = "crate::sources::sems::de_coord"
    )]
    pub longitude: Option<f64>,
}

impl SiteRecord {
    /// Coordinate pair, if the site has confirmed NPL coordinates.
    pub fn geo_point(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.latitude?, self.longitude?))
    }
}

/// A site that survived the radius filter, enriched with its distance
/// from the user's address and its public detail-page URL.
#[derive(Debug, Clone)]
pub struct NearbySite {
    pub record: SiteRecord,
    pub distance_miles: f64,
    pub detail_url: String,
}
