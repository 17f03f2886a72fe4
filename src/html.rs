use crate::survey::{Runway, Survey};

pub static NO_DATA_PLACEHOLDER: &str = "<p><em>No survey data found in this PR.</em></p>";
pub static UNPARSED_PLACEHOLDER: &str =
    "<p><em>Survey files found but could not be parsed.</em></p>";

static HTML_HEAD: &str = "<!DOCTYPE html>
<html>
<head>
    <meta charset=\"utf-8\">
    <link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.css\" />
    <script src=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.js\"></script>
    <style>
        #map { height: 600px; width: 100%; border: 2px solid #333; border-radius: 8px; }
    </style>
</head>
<body>
    <div id=\"map\"></div>
    <script>
";

static TILE_LAYERS: &str = "
        // Satellite imagery base layer (Esri World Imagery)
        L.tileLayer('https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}', {
            attribution: 'Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community',
            maxZoom: 19
        }).addTo(map);

        // Labels overlay for context
        L.tileLayer('https://{s}.basemaps.cartocdn.com/light_only_labels/{z}/{x}/{y}.png', {
            attribution: '&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>',
            pane: 'shadowPane',
            maxZoom: 19
        }).addTo(map);
";

static HTML_FOOT: &str = "
        if (bounds.isValid()) {
            map.fitBounds(bounds, { padding: [50, 50] });
        }
    </script>
</body>
</html>
";

pub fn render_map(surveys: &[Survey]) -> String {
    let (center_lat, center_lon) = map_center(surveys);

    let mut html = String::new();
    html += HTML_HEAD;
    html += &format!(
        "        var map = L.map('map').setView([{lat}, {lon}], 15);\n",
        lat = center_lat,
        lon = center_lon
    );
    html += TILE_LAYERS;

    for survey in surveys {
        for runway in &survey.runways {
            render_runway(&mut html, &survey.airport_icao, runway);
        }
    }

    html += "\n        // Fit map to show all markers\n";
    html += "        var bounds = L.latLngBounds([]);\n";
    for runway in surveys.iter().flat_map(|survey| &survey.runways) {
        for corner in &runway.corners {
            html += &format!("        bounds.extend([{}, {}]);\n", corner.lat, corner.lon);
        }
    }
    html += HTML_FOOT;

    html
}

/// Camera center: arithmetic mean of every threshold coordinate. Corner
/// and touchdown points do not participate.
fn map_center(surveys: &[Survey]) -> (f64, f64) {
    let mut all_lats = Vec::new();
    let mut all_lons = Vec::new();
    for runway in surveys.iter().flat_map(|survey| &survey.runways) {
        all_lats.push(runway.threshold1.lat);
        all_lats.push(runway.threshold2.lat);
        all_lons.push(runway.threshold1.lon);
        all_lons.push(runway.threshold2.lon);
    }

    if all_lats.is_empty() {
        return (0.0, 0.0);
    }

    let count = all_lats.len() as f64;
    (
        all_lats.iter().sum::<f64>() / count,
        all_lons.iter().sum::<f64>() / count,
    )
}

fn render_runway(html: &mut String, icao: &str, runway: &Runway) {
    for (i, corner) in runway.corners.iter().enumerate() {
        *html += &format!(
            "
        L.circleMarker([{lat}, {lon}], {{
            radius: 6,
            fillColor: '#ff0000',
            color: '#ffffff',
            weight: 2,
            opacity: 1,
            fillOpacity: 0.8
        }}).addTo(map)
        .bindPopup('<b>Corner {num}</b><br>Lat: {lat:.8}<br>Lon: {lon:.8}');
",
            num = i + 1,
            lat = corner.lat,
            lon = corner.lon
        );
    }

    let thr1 = runway.threshold1;
    let thr2 = runway.threshold2;
    *html += &format!(
        "
        L.polyline([
            [{lat1}, {lon1}],
            [{lat2}, {lon2}]
        ], {{
            color: '#00ff00',
            weight: 3,
            opacity: 0.8
        }}).addTo(map)
        .bindPopup('<b>{icao} Runway {designator}</b><br>Heading: {heading:.1}°<br>Length: {length:.0} ft<br>Width: {width:.0} ft');
",
        lat1 = thr1.lat,
        lon1 = thr1.lon,
        lat2 = thr2.lat,
        lon2 = thr2.lon,
        icao = icao,
        designator = runway.designator,
        heading = runway.heading,
        length = runway.length,
        width = runway.width
    );

    *html += &format!(
        "
        L.circleMarker([{lat1}, {lon1}], {{
            radius: 8,
            fillColor: '#0066ff',
            color: '#ffffff',
            weight: 2,
            opacity: 1,
            fillOpacity: 0.9
        }}).addTo(map)
        .bindPopup('<b>Threshold 1</b><br>RWY {designator}');

        L.circleMarker([{lat2}, {lon2}], {{
            radius: 8,
            fillColor: '#0066ff',
            color: '#ffffff',
            weight: 2,
            opacity: 1,
            fillOpacity: 0.9
        }}).addTo(map)
        .bindPopup('<b>Threshold 2</b><br>RWY {designator}');
",
        lat1 = thr1.lat,
        lon1 = thr1.lon,
        lat2 = thr2.lat,
        lon2 = thr2.lon,
        designator = runway.designator
    );

    // Touchdown points are optional survey extras; (0, 0) means absent.
    let touchdowns = [(1, runway.touchdown1), (2, runway.touchdown2)];
    for &(num, point) in &touchdowns {
        if point.is_zero() {
            continue;
        }
        *html += &format!(
            "
        L.circleMarker([{lat}, {lon}], {{
            radius: 6,
            fillColor: '#ffcc00',
            color: '#ffffff',
            weight: 2,
            opacity: 1,
            fillOpacity: 0.8
        }}).addTo(map)
        .bindPopup('<b>Touchdown {num}</b><br>RWY {designator}');
",
            num = num,
            lat = point.lat,
            lon = point.lon,
            designator = runway.designator
        );
    }
}
