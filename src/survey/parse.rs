use std::fs;
use std::path::Path;

use serde_json::Value;

use super::*;
use crate::error::{Error, Result};
use crate::geo::{self, LatLon};

pub fn parse_survey_file(path: &Path) -> Result<Survey> {
    let raw: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    parse_survey(&path.display().to_string(), &raw)
}

pub fn parse_survey(file: &str, raw: &Value) -> Result<Survey> {
    let mut survey = SurveyBuilder::default();
    survey.file(file.to_string());
    survey.airport_icao(string_field(raw, &["icao", "airport_icao"], "UNKNOWN"));
    survey.airport_name(string_field(raw, &["name", "airport_name"], ""));

    // An airport record wraps its runways in a list; anything else is one
    // bare runway record standing for itself.
    let runways = match raw.get("runways") {
        Some(list) => list
            .as_array()
            .ok_or_else(|| Error::Survey {
                msg: "`runways` is not a list".to_string(),
            })?
            .iter()
            .map(parse_runway)
            .collect::<Result<Vec<_>>>()?,
        None => vec![parse_runway(raw)?],
    };
    survey.runways(runways);

    survey.build().map_err(|e| Error::Survey { msg: e.to_string() })
}

fn parse_runway(raw: &Value) -> Result<Runway> {
    let heading = num_field(raw, &["trueHeading", "heading"]);
    let width = num_field(raw, &["width"]);
    let threshold1 = point_field(raw, "threshold1Latitude", "threshold1Longitude");
    let threshold2 = point_field(raw, "threshold2Latitude", "threshold2Longitude");

    let mut runway = RunwayBuilder::default();
    runway.designator(string_field(raw, &["runwayNumber", "designator"], "N/A"));
    runway.heading(heading);
    runway.length(num_field(raw, &["length"]));
    runway.width(width);
    runway.threshold1(threshold1);
    runway.threshold2(threshold2);
    runway.touchdown1(point_field(raw, "touchdown1Latitude", "touchdown1Longitude"));
    runway.touchdown2(point_field(raw, "touchdown2Latitude", "touchdown2Longitude"));
    runway.corners(match supplied_corners(raw) {
        Some(corners) => corners,
        None => geo::runway_corners(threshold1, threshold2, heading, width),
    });

    runway.build().map_err(|e| Error::Survey { msg: e.to_string() })
}

/// Looks keys up in priority order; upstream exports disagree on naming.
/// A key holding a wrong-typed value falls through to the next candidate.
fn string_field(raw: &Value, keys: &[&str], default: &str) -> String {
    keys.iter()
        .filter_map(|&key| raw.get(key))
        .find_map(|value| match value {
            Value::String(s) => Some(s.clone()),
            // Some exports write numeric designators
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| default.to_string())
}

fn num_field(raw: &Value, keys: &[&str]) -> f64 {
    keys.iter()
        .filter_map(|&key| raw.get(key))
        .find_map(Value::as_f64)
        .unwrap_or(0.0)
}

fn point_field(raw: &Value, lat_key: &str, lon_key: &str) -> LatLon {
    LatLon::new(num_field(raw, &[lat_key]), num_field(raw, &[lon_key]))
}

/// A surveyed `corners` list wins over the computed footprint, but only
/// when it has all 4 points; extra entries past the first 4 are dropped.
fn supplied_corners(raw: &Value) -> Option<[LatLon; 4]> {
    let list = raw.get("corners").and_then(Value::as_array)?;
    if list.len() < 4 {
        return None;
    }

    let mut corners = [LatLon::new(0.0, 0.0); 4];
    for (slot, corner) in corners.iter_mut().zip(list) {
        *slot = LatLon::new(
            corner.get("latitude").and_then(Value::as_f64).unwrap_or(0.0),
            corner.get("longitude").and_then(Value::as_f64).unwrap_or(0.0),
        );
    }
    Some(corners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record_gets_documented_defaults() {
        let survey = parse_survey("a.json", &json!({})).unwrap();
        assert_eq!(survey.airport_icao, "UNKNOWN");
        assert_eq!(survey.airport_name, "");
        assert_eq!(survey.runways.len(), 1);

        let runway = &survey.runways[0];
        assert_eq!(runway.designator, "N/A");
        assert_eq!(runway.heading, 0.0);
        assert_eq!(runway.length, 0.0);
        assert_eq!(runway.width, 0.0);
        assert!(runway.threshold1.is_zero());
        assert!(runway.touchdown2.is_zero());
    }

    #[test]
    fn test_fallback_chain_priority() {
        let raw = json!({
            "icao": "KSEA",
            "airport_icao": "XXXX",
            "runwayNumber": "16L",
            "designator": "34R",
            "trueHeading": 160,
            "heading": 20
        });
        let survey = parse_survey("a.json", &raw).unwrap();
        assert_eq!(survey.airport_icao, "KSEA");
        assert_eq!(survey.runways[0].designator, "16L");
        assert_eq!(survey.runways[0].heading, 160.0);
    }

    #[test]
    fn test_secondary_keys_used_when_primary_absent() {
        let raw = json!({
            "airport_icao": "KBFI",
            "airport_name": "Boeing Field",
            "designator": "14R",
            "heading": 136.0
        });
        let survey = parse_survey("a.json", &raw).unwrap();
        assert_eq!(survey.airport_icao, "KBFI");
        assert_eq!(survey.airport_name, "Boeing Field");
        assert_eq!(survey.runways[0].designator, "14R");
        assert_eq!(survey.runways[0].heading, 136.0);
    }

    #[test]
    fn test_wrong_typed_value_falls_through_chain() {
        let raw = json!({"trueHeading": "north-ish", "heading": 20});
        let survey = parse_survey("a.json", &raw).unwrap();
        assert_eq!(survey.runways[0].heading, 20.0);
    }

    #[test]
    fn test_numeric_designator_rendered_in_decimal() {
        let raw = json!({"runwayNumber": 16});
        let survey = parse_survey("a.json", &raw).unwrap();
        assert_eq!(survey.runways[0].designator, "16");
    }

    #[test]
    fn test_wrapped_runway_list() {
        let raw = json!({
            "icao": "KSEA",
            "runways": [
                {"runwayNumber": "16L"},
                {"runwayNumber": "16C"},
                {"runwayNumber": "16R"}
            ]
        });
        let survey = parse_survey("a.json", &raw).unwrap();
        assert_eq!(survey.runways.len(), 3);
        assert_eq!(survey.runways[1].designator, "16C");
    }

    #[test]
    fn test_runways_key_must_hold_a_list() {
        assert!(parse_survey("a.json", &json!({"runways": 5})).is_err());
        assert!(parse_survey("a.json", &json!({"runways": {"runwayNumber": "16L"}})).is_err());
    }

    #[test]
    fn test_thresholds_flattened_into_points() {
        let raw = json!({
            "threshold1Latitude": 47.4,
            "threshold1Longitude": -122.3,
            "threshold2Latitude": 47.43,
            "threshold2Longitude": -122.31
        });
        let runway = &parse_survey("a.json", &raw).unwrap().runways[0];
        assert_eq!(runway.threshold1, LatLon::new(47.4, -122.3));
        assert_eq!(runway.threshold2, LatLon::new(47.43, -122.31));
    }

    #[test]
    fn test_supplied_corners_take_first_four_in_order() {
        let raw = json!({
            "trueHeading": 160,
            "width": 150,
            "corners": [
                {"latitude": 1.0, "longitude": -1.0},
                {"latitude": 2.0, "longitude": -2.0},
                {"latitude": 3.0, "longitude": -3.0},
                {"latitude": 4.0, "longitude": -4.0},
                {"latitude": 5.0, "longitude": -5.0}
            ]
        });
        let runway = &parse_survey("a.json", &raw).unwrap().runways[0];
        assert_eq!(
            runway.corners,
            [
                LatLon::new(1.0, -1.0),
                LatLon::new(2.0, -2.0),
                LatLon::new(3.0, -3.0),
                LatLon::new(4.0, -4.0),
            ]
        );
    }

    #[test]
    fn test_corner_entry_components_default_to_zero() {
        let raw = json!({
            "corners": [
                {"latitude": 1.0},
                {"longitude": -2.0},
                {},
                {"latitude": 4.0, "longitude": -4.0}
            ]
        });
        let runway = &parse_survey("a.json", &raw).unwrap().runways[0];
        assert_eq!(runway.corners[0], LatLon::new(1.0, 0.0));
        assert_eq!(runway.corners[1], LatLon::new(0.0, -2.0));
        assert_eq!(runway.corners[2], LatLon::new(0.0, 0.0));
    }

    #[test]
    fn test_short_corner_list_falls_back_to_computed() {
        let raw = json!({
            "trueHeading": 160,
            "width": 150,
            "threshold1Latitude": 47.4,
            "threshold1Longitude": -122.3,
            "threshold2Latitude": 47.43,
            "threshold2Longitude": -122.31,
            "corners": [
                {"latitude": 1.0, "longitude": -1.0},
                {"latitude": 2.0, "longitude": -2.0}
            ]
        });
        let runway = &parse_survey("a.json", &raw).unwrap().runways[0];
        let expected = geo::runway_corners(
            LatLon::new(47.4, -122.3),
            LatLon::new(47.43, -122.31),
            160.0,
            150.0,
        );
        assert_eq!(runway.corners, expected);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raw = json!({
            "icao": "KSEA",
            "runways": [{
                "runwayNumber": "16L",
                "trueHeading": 160,
                "length": 11901,
                "width": 150,
                "threshold1Latitude": 47.4,
                "threshold1Longitude": -122.3,
                "threshold2Latitude": 47.43,
                "threshold2Longitude": -122.31
            }]
        });
        assert_eq!(
            parse_survey("a.json", &raw).unwrap(),
            parse_survey("a.json", &raw).unwrap()
        );
    }

    #[test]
    fn test_parse_survey_file_roundtrip() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        fs::write(tmp.path(), r#"{"icao": "KSEA", "runways": [{"runwayNumber": "16L"}]}"#)
            .unwrap();
        let survey = parse_survey_file(tmp.path()).unwrap();
        assert_eq!(survey.airport_icao, "KSEA");
        assert_eq!(survey.file, tmp.path().display().to_string());
    }

    #[test]
    fn test_parse_survey_file_reports_bad_json() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        fs::write(tmp.path(), "{ not json").unwrap();
        assert!(parse_survey_file(tmp.path()).is_err());
    }
}
