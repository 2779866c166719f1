use crate::models::NearbySite;
use std::io::{self, Write};

/// Print the ranked site list: a count/radius header, then one
/// numbered entry per site with its raw distance and detail URL.
pub fn write_report(out: &mut impl Write, sites: &[NearbySite], radius_miles: f64) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "There are {} Superfund Sites within {} miles of your address:",
        sites.len(),
        radius_miles
    )?;
    writeln!(out)?;
    for (i, site) in sites.iter().enumerate() {
        writeln!(
            out,
            "{}): {} is {} miles away.",
            i + 1,
            site.record.name,
            site.distance_miles
        )?;
        writeln!(out, "URL: {}", site.detail_url)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Printed instead of the report when nothing survived the filter.
pub fn write_empty_notice(out: &mut impl Write, radius_miles: f64) -> io::Result<()> {
    writeln!(
        out,
        "There are 0 Superfund Sites within {} miles of your address",
        radius_miles
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;
    use crate::pipeline::ranking::rank_nearby;
    use crate::sources::sems::parse_sites;

    #[test]
    fn reports_ranked_sites_with_urls() {
        // Address resolves to (39.9, -83.0); three sites at roughly
        // 10, 40 and 80 miles due north. Only the first two report.
        let body = r#"[
            {"SITE_ID": "0502222", "SITE_NAME": "MIDDLE SITE", "SITE_STATE": "OH",
             "LATITUDE": 40.4797, "LONGITUDE": -83.0},
            {"SITE_ID": "0503333", "SITE_NAME": "FAR SITE", "SITE_STATE": "OH",
             "LATITUDE": 41.0594, "LONGITUDE": -83.0},
            {"SITE_ID": "0501111", "SITE_NAME": "NEAR SITE", "SITE_STATE": "OH",
             "LATITUDE": 40.0449, "LONGITUDE": -83.0}
        ]"#;
        let sites = parse_sites(body).unwrap();
        let nearby = rank_nearby(GeoPoint::new(39.9, -83.0), sites, 50.0);

        let mut out = Vec::new();
        write_report(&mut out, &nearby, 50.0).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.contains("There are 2 Superfund Sites within 50 miles of your address:"));
        assert!(!report.contains("FAR SITE"));

        let near = report.find("1): NEAR SITE").unwrap();
        let middle = report.find("2): MIDDLE SITE").unwrap();
        assert!(near < middle);
        assert!(report
            .contains("URL: https://cumulis.epa.gov/supercpad/cursites/csitinfo.cfm?id=0501111"));
        assert!(report
            .contains("URL: https://cumulis.epa.gov/supercpad/cursites/csitinfo.cfm?id=0502222"));
    }

    #[test]
    fn zero_survivors_prints_the_empty_notice() {
        // Every row lacks coordinates, so nothing survives the filter.
        let body = r#"[
            {"SITE_ID": "0509999", "SITE_NAME": "PROPOSED", "SITE_STATE": "OH",
             "LATITUDE": null, "LONGITUDE": null}
        ]"#;
        let sites = parse_sites(body).unwrap();
        let nearby = rank_nearby(GeoPoint::new(39.9, -83.0), sites, 50.0);
        assert!(nearby.is_empty());

        let mut out = Vec::new();
        write_empty_notice(&mut out, 50.0).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "There are 0 Superfund Sites within 50 miles of your address\n"
        );
    }
}
