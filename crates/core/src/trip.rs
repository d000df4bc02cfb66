//! Trip and place input validation.
//!
//! Request bodies arrive with every field optional so that a missing field
//! becomes a 400 with a readable message rather than a deserialization
//! rejection. The functions here turn those raw fields into validated drafts.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::TripDate;

/// Message returned when any trip field is missing.
pub const MISSING_TRIP_FIELDS: &str = "Please fill all fields";

/// Message returned when a place lacks its identifier or name.
pub const MISSING_PLACE_FIELDS: &str = "placeId and name are required";

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// A validated request to create a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDraft {
    pub title: String,
    pub start_date: TripDate,
    pub end_date: TripDate,
}

/// A validated place, used both for favorites and for trip entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDraft {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Parse a trip date from either `YYYY-MM-DD` or a full RFC 3339 timestamp.
///
/// Timestamps are truncated to their calendar date, which is what browser
/// date pickers serialised through `Date.toISOString()` produce.
pub fn parse_trip_date(field: &str, raw: &str) -> Result<TripDate, CoreError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.date_naive())
        .map_err(|_| CoreError::Validation(format!("{field} must be a date (YYYY-MM-DD)")))
}

/// Validate the raw fields of a create-trip request.
///
/// End dates earlier than the start date are accepted as-is.
pub fn validate_trip_fields(
    title: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<TripDraft, CoreError> {
    let (Some(title), Some(start), Some(end)) = (
        non_blank(title),
        non_blank(start_date),
        non_blank(end_date),
    ) else {
        return Err(CoreError::Validation(MISSING_TRIP_FIELDS.to_string()));
    };

    Ok(TripDraft {
        title: title.to_string(),
        start_date: parse_trip_date("startDate", start)?,
        end_date: parse_trip_date("endDate", end)?,
    })
}

/// Validate the raw fields of a place (favorite or trip entry).
///
/// Address and coordinates are optional and default to empty / zero.
/// Coordinates that are given must lie within ±90 latitude and ±180
/// longitude.
pub fn validate_place_fields(
    place_id: Option<&str>,
    name: Option<&str>,
    address: Option<&str>,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<PlaceDraft, CoreError> {
    let (Some(place_id), Some(name)) = (non_blank(place_id), non_blank(name)) else {
        return Err(CoreError::Validation(MISSING_PLACE_FIELDS.to_string()));
    };

    let lat = coordinate("lat", lat, MAX_LATITUDE)?;
    let lng = coordinate("lng", lng, MAX_LONGITUDE)?;

    Ok(PlaceDraft {
        place_id: place_id.to_string(),
        name: name.to_string(),
        address: address.unwrap_or_default().trim().to_string(),
        lat,
        lng,
    })
}

fn coordinate(field: &str, value: Option<f64>, bound: f64) -> Result<f64, CoreError> {
    match value {
        None => Ok(0.0),
        Some(v) if v.is_finite() && v.abs() <= bound => Ok(v),
        Some(_) => Err(CoreError::Validation(format!(
            "{field} must be between -{bound} and {bound}"
        ))),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_plain_dates() {
        let date = parse_trip_date("startDate", "2025-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn parses_rfc3339_timestamps() {
        let date = parse_trip_date("startDate", "2025-03-09T00:00:00.000Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    }

    #[test]
    fn rejects_garbage_dates() {
        let err = parse_trip_date("endDate", "next tuesday").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.starts_with("endDate"));
    }

    #[test]
    fn trip_requires_every_field() {
        let err = validate_trip_fields(Some("Jaffna"), None, Some("2025-01-03")).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == MISSING_TRIP_FIELDS);

        let err = validate_trip_fields(Some("   "), Some("2025-01-01"), Some("2025-01-03"))
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn trip_end_before_start_is_accepted() {
        let draft =
            validate_trip_fields(Some("Backwards"), Some("2025-02-10"), Some("2025-02-01")).unwrap();
        assert!(draft.end_date < draft.start_date);
    }

    #[test]
    fn place_defaults_optional_fields() {
        let place = validate_place_fields(Some("p1"), Some("Fort"), None, None, None).unwrap();
        assert_eq!(place.address, "");
        assert_eq!(place.lat, 0.0);
        assert_eq!(place.lng, 0.0);
    }

    #[test]
    fn place_requires_id_and_name() {
        let err = validate_place_fields(None, Some("Fort"), None, None, None).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == MISSING_PLACE_FIELDS);
    }

    #[test]
    fn place_rejects_out_of_range_coordinates() {
        let err = validate_place_fields(Some("p1"), Some("Fort"), None, Some(999.0), None)
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "lat must be between -90 and 90");

        let err = validate_place_fields(Some("p1"), Some("Fort"), None, None, Some(-180.5))
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.starts_with("lng"));

        let place =
            validate_place_fields(Some("p1"), Some("Pole"), None, Some(-90.0), Some(180.0)).unwrap();
        assert_eq!((place.lat, place.lng), (-90.0, 180.0));
    }
}
