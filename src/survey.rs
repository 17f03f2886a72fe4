use crate::geo::LatLon;

pub mod parse;

#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(private)]
pub struct Survey {
    pub file: String,
    pub airport_icao: String,
    pub airport_name: String,
    pub runways: Vec<Runway>,
}

#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(private)]
pub struct Runway {
    pub designator: String,
    /// True heading in degrees.
    pub heading: f64,
    /// Length and width in feet.
    pub length: f64,
    pub width: f64,
    pub threshold1: LatLon,
    pub threshold2: LatLon,
    pub touchdown1: LatLon,
    pub touchdown2: LatLon,
    /// Always exactly 4: thr1-left, thr1-right, thr2-right, thr2-left.
    pub corners: [LatLon; 4],
}
