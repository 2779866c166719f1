use crate::models::GeoPoint;
use anyhow::Result;
use async_trait::async_trait;

/// Forward geocoder: free-text address in, coordinates out.
/// Kept as a trait so the pipeline can be exercised without hitting
/// the real service.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve an address to its best-match coordinates. No match and
    /// transport failures are both plain errors; the caller decides
    /// how to report them.
    async fn geocode(&self, address: &str) -> Result<GeoPoint>;
}
