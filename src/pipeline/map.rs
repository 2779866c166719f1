use crate::models::NearbySite;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::path::Path;

// Fixed world view matching the console report's companion figure.
const MAP_CENTER: (f64, f64) = (30.0, 31.0);
const MAP_ZOOM: f64 = 1.5;

/// Render a static Google Maps page with one marker per site.
pub fn render_map(sites: &[NearbySite], api_key: &str, retrieved_at: DateTime<Utc>) -> String {
    let markers: Vec<serde_json::Value> = sites
        .iter()
        .filter_map(|site| {
            let point = site.record.geo_point()?;
            Some(json!({
                "lat": point.latitude,
                "lng": point.longitude,
                "title": site.record.name,
            }))
        })
        .collect();
    let markers = serde_json::Value::Array(markers);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Superfund Sites</title>
  <style>
    html, body {{ height: 100%; margin: 0; }}
    #map {{ height: 96%; }}
    footer {{ font: 12px sans-serif; padding: 4px 8px; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <footer>Site data retrieved {retrieved_at}</footer>
  <script>
    const markers = {markers};
    function initMap() {{
      const map = new google.maps.Map(document.getElementById("map"), {{
        center: {{ lat: {lat}, lng: {lng} }},
        zoom: {zoom},
      }});
      for (const m of markers) {{
        new google.maps.Marker({{ position: {{ lat: m.lat, lng: m.lng }}, map, title: m.title }});
      }}
    }}
  </script>
  <script async src="https://maps.googleapis.com/maps/api/js?key={api_key}&callback=initMap"></script>
</body>
</html>
"#,
        retrieved_at = retrieved_at.format("%Y-%m-%d %H:%M UTC"),
        lat = MAP_CENTER.0,
        lng = MAP_CENTER.1,
        zoom = MAP_ZOOM,
    )
}

/// Write the rendered page out to disk.
pub async fn write_map(path: &Path, html: &str) -> Result<()> {
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write map to {}", path.display()))
}
