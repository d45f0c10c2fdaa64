use crate::prelude::DispatchResult;
use crate::roster::Location;

const MAP_ZOOM: u32 = 13;

const MAP_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Vehicle Movement Map</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css"
    crossorigin="anonymous" referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js"
    crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  <script src="https://cdn.jsdelivr.net/npm/leaflet-ant-path@1.3.0/dist/leaflet-ant-path.js"></script>
  <style>
    html, body { height: 100%; margin: 0; }
    #map { height: 100%; width: 100%; }
    .station-marker {
      width: 18px;
      height: 18px;
      border-radius: 50%;
      background: #22c55e;
      border: 2px solid #14532d;
    }
    .incident-marker {
      width: 18px;
      height: 18px;
      border-radius: 50%;
      background: #ef4444;
      border: 2px solid #7f1d1d;
    }
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    var map = L.map('map').setView([__STATION_LAT__, __STATION_LON__], __ZOOM__);
    L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }).addTo(map);
    L.polyline.antPath([
      [__STATION_LAT__, __STATION_LON__],
      [__INCIDENT_LAT__, __INCIDENT_LON__]
    ], { color: 'red', weight: 5 }).addTo(map);
    L.marker([__STATION_LAT__, __STATION_LON__], {
      icon: L.divIcon({ className: 'station-marker' })
    }).bindTooltip('Fire Station').addTo(map);
    L.marker([__INCIDENT_LAT__, __INCIDENT_LON__], {
      icon: L.divIcon({ className: 'incident-marker' })
    }).bindTooltip('Incident Location').addTo(map);
  </script>
</body>
</html>
"#;

/// Builds the self-contained movement map for one dispatch: the station
/// marker, the incident marker, and the animated two-point path between
/// them. Regenerated in full on every call.
///
/// Coordinate text that does not parse as floating point is terminal for
/// the request; no document is produced.
pub fn render_map(station: Location, lat_raw: &str, lon_raw: &str) -> DispatchResult<String> {
    let destination = Location::parse(lat_raw, lon_raw)?;
    Ok(MAP_TEMPLATE
        .replace("__STATION_LAT__", &station.latitude.to_string())
        .replace("__STATION_LON__", &station.longitude.to_string())
        .replace("__INCIDENT_LAT__", &destination.latitude.to_string())
        .replace("__INCIDENT_LON__", &destination.longitude.to_string())
        .replace("__ZOOM__", &MAP_ZOOM.to_string()))
}
