use crate::models::{GeoPoint, NearbySite, SiteRecord};
use tracing::debug;

/// EPA site-profile lookup tool; the site id is appended verbatim.
const SITE_DETAIL_BASE: &str = "https://cumulis.epa.gov/supercpad/cursites/csitinfo.cfm?id=";

/// Public detail-page URL for a site id.
pub fn detail_url(site_id: &str) -> String {
    format!("{SITE_DETAIL_BASE}{site_id}")
}

/// Keep the sites with confirmed coordinates within `radius_miles` of
/// `origin`, enriched with distance and detail URL, sorted nearest
/// first. Tie order between equal distances is not specified.
pub fn rank_nearby(origin: GeoPoint, sites: Vec<SiteRecord>, radius_miles: f64) -> Vec<NearbySite> {
    let total = sites.len();
    let mut nearby: Vec<NearbySite> = sites
        .into_iter()
        .filter_map(|record| {
            let point = record.geo_point()?;
            let distance_miles = origin.distance_miles(point);
            if distance_miles > radius_miles {
                return None;
            }
            let detail_url = detail_url(&record.site_id);
            Some(NearbySite {
                record,
                distance_miles,
                detail_url,
            })
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    debug!(
        "{} of {} sites within {} miles",
        nearby.len(),
        total,
        radius_miles
    );
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(id: &str, name: &str, lat: Option<f64>, lon: Option<f64>) -> SiteRecord {
        SiteRecord {
            site_id: id.to_string(),
            name: name.to_string(),
            state: "OH".to_string(),
            latitude: lat,
            longitude: lon,
        }
    }

    // One degree of latitude is roughly 69 miles, so offsets in
    // degrees north of the origin give predictable distances.
    fn origin() -> GeoPoint {
        GeoPoint::new(39.9, -83.0)
    }

    #[test]
    fn detail_url_is_literal_concatenation() {
        assert_eq!(
            detail_url("0601234"),
            "https://cumulis.epa.gov/supercpad/cursites/csitinfo.cfm?id=0601234"
        );
    }

    #[test]
    fn filters_sorts_and_enriches() {
        let sites = vec![
            site("40", "FORTY MILES", Some(39.9 + 40.0 / 69.0), Some(-83.0)),
            site("80", "EIGHTY MILES", Some(39.9 + 80.0 / 69.0), Some(-83.0)),
            site("10", "TEN MILES", Some(39.9 + 10.0 / 69.0), Some(-83.0)),
        ];

        let nearby = rank_nearby(origin(), sites, 50.0);

        assert_eq!(nearby.len(), 2);
        assert_eq!(nearby[0].record.name, "TEN MILES");
        assert_eq!(nearby[1].record.name, "FORTY MILES");
        assert!((9.0..11.0).contains(&nearby[0].distance_miles));
        assert!((39.0..41.0).contains(&nearby[1].distance_miles));
        assert_eq!(
            nearby[0].detail_url,
            "https://cumulis.epa.gov/supercpad/cursites/csitinfo.cfm?id=10"
        );
    }

    #[test]
    fn survivors_satisfy_the_radius_invariant() {
        let sites: Vec<SiteRecord> = (0..20)
            .map(|i| {
                site(
                    &format!("{i:07}"),
                    "S",
                    Some(39.9 + i as f64 * 5.0 / 69.0),
                    Some(-83.0),
                )
            })
            .collect();

        let nearby = rank_nearby(origin(), sites, 50.0);

        assert!(!nearby.is_empty());
        for pair in nearby.windows(2) {
            assert!(pair[0].distance_miles <= pair[1].distance_miles);
        }
        for s in &nearby {
            assert!(s.distance_miles <= 50.0);
            assert!(s.record.geo_point().is_some());
        }
    }

    #[test]
    fn drops_sites_without_coordinates() {
        let sites = vec![
            site("1", "UNLOCATED", None, None),
            site("2", "HALF LOCATED", Some(39.9), None),
            site("3", "AT ORIGIN", Some(39.9), Some(-83.0)),
        ];

        let nearby = rank_nearby(origin(), sites, 50.0);

        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].record.name, "AT ORIGIN");
        assert_eq!(nearby[0].distance_miles, 0.0);
    }

    #[test]
    fn all_out_of_range_yields_empty() {
        let sites = vec![site("1", "FAR", Some(45.0), Some(-120.0))];
        assert!(rank_nearby(origin(), sites, 50.0).is_empty());
    }
}
