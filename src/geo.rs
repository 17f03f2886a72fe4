use std::f64::consts::FRAC_PI_2;

/// Rough feet-to-degrees divisor. Only holds for short distances away from
/// the poles; kept as-is so computed corners match earlier survey maps.
const FEET_PER_DEGREE: f64 = 364_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon { lat, lon }
    }

    /// (0, 0) is the "not surveyed" sentinel for touchdown points.
    pub fn is_zero(self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }
}

/// Projects the runway's lateral boundary from its centerline: half the
/// width offset perpendicular to the heading, on both sides of each
/// threshold. Winding is fixed as thr1-left, thr1-right, thr2-right,
/// thr2-left. A width of 0 collapses the corners onto the thresholds.
pub fn runway_corners(thr1: LatLon, thr2: LatLon, heading: f64, width: f64) -> [LatLon; 4] {
    let perp_bearing = heading.to_radians() + FRAC_PI_2;
    let width_deg = (width / 2.0) / FEET_PER_DEGREE;

    let lat_offset = width_deg * perp_bearing.cos();
    let lon_offset = width_deg * perp_bearing.sin();

    [
        LatLon::new(thr1.lat - lat_offset, thr1.lon - lon_offset),
        LatLon::new(thr1.lat + lat_offset, thr1.lon + lon_offset),
        LatLon::new(thr2.lat + lat_offset, thr2.lon + lon_offset),
        LatLon::new(thr2.lat - lat_offset, thr2.lon - lon_offset),
    ]
}
