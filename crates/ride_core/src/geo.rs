//! Geographic operations: coordinate normalization and distance estimation.
//!
//! This module provides:
//!
//! - **Coordinate**: a validated `(longitude, latitude)` pair
//! - **Parsing**: normalization of the coordinate shapes the backend and the
//!   place-search API emit (point strings, JSON arrays, `lng`/`lat` objects,
//!   bare CSV)
//! - **Distance estimation**: haversine great-circle distance in miles
//!
//! Parsing never fails loudly: anything that cannot be read as two finite
//! in-range numbers yields `None`, and display code falls back to "N/A".

use serde_json::Value;

/// Earth's mean radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A canonical `(longitude, latitude)` pair.
///
/// Construction goes through [`Coordinate::new`] or one of the parse
/// functions, so a `Coordinate` always holds finite values with
/// `lng ∈ [-180, 180]` and `lat ∈ [-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lng: f64,
    lat: f64,
}

impl Coordinate {
    /// Build a coordinate from `(lng, lat)`, rejecting non-finite or
    /// out-of-range values.
    pub fn new(lng: f64, lat: f64) -> Option<Self> {
        let in_range = lng.is_finite()
            && lat.is_finite()
            && (-180.0..=180.0).contains(&lng)
            && (-90.0..=90.0).contains(&lat);
        in_range.then_some(Self { lng, lat })
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Normalize a backend or place-search value into a coordinate.
    ///
    /// Accepts a two-number JSON array (place-search order `[lng, lat]`), an
    /// object with `lng`/`lat` keys, or any of the string shapes handled by
    /// [`Coordinate::parse_str`].
    pub fn parse_value(raw: &Value) -> Option<Self> {
        match raw {
            Value::Array(items) => pair_from_values(items),
            Value::Object(map) => pair_from_object(map),
            Value::String(s) => Self::parse_str(s),
            _ => None,
        }
    }

    /// Normalize a textual coordinate into a coordinate.
    ///
    /// Strategies are tried in order, first success wins:
    ///
    /// 1. point-typed string `"(lng,lat)"` as stored by the backend
    /// 2. strict JSON: a two-number array or a `{"lng": .., "lat": ..}` object
    /// 3. bare comma-separated `"lng,lat"`
    pub fn parse_str(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(coord) = parse_point_string(trimmed)
            .or_else(|| parse_json_string(trimmed))
            .or_else(|| parse_csv_string(trimmed))
        {
            return Some(coord);
        }

        log::debug!("unparseable coordinate: {trimmed:?}");
        None
    }
}

/// `"(lng,lat)"` with mandatory parentheses, as emitted by point-typed
/// backend columns.
fn parse_point_string(s: &str) -> Option<Coordinate> {
    let inner = s.strip_prefix('(')?.strip_suffix(')')?;
    let (lng, lat) = inner.split_once(',')?;
    pair_from_strs(lng, lat)
}

/// Strict JSON parse: `[lng, lat]` array or `{"lng": .., "lat": ..}` object.
fn parse_json_string(s: &str) -> Option<Coordinate> {
    match serde_json::from_str::<Value>(s).ok()? {
        Value::Array(items) => pair_from_values(&items),
        Value::Object(map) => pair_from_object(&map),
        _ => None,
    }
}

/// Bare `"lng,lat"` without delimiters.
fn parse_csv_string(s: &str) -> Option<Coordinate> {
    let (lng, lat) = s.split_once(',')?;
    pair_from_strs(lng, lat)
}

fn pair_from_strs(lng: &str, lat: &str) -> Option<Coordinate> {
    let lng: f64 = lng.trim().parse().ok()?;
    let lat: f64 = lat.trim().parse().ok()?;
    Coordinate::new(lng, lat)
}

/// Two-element sequence in `[lng, lat]` order. Elements may be JSON numbers
/// or numeric strings; anything else is rejected.
fn pair_from_values(items: &[Value]) -> Option<Coordinate> {
    if items.len() != 2 {
        return None;
    }
    let lng = number_from_value(&items[0])?;
    let lat = number_from_value(&items[1])?;
    Coordinate::new(lng, lat)
}

fn pair_from_object(map: &serde_json::Map<String, Value>) -> Option<Coordinate> {
    let lng = number_from_value(map.get("lng")?)?;
    let lat = number_from_value(map.get("lat")?)?;
    Coordinate::new(lng, lat)
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Haversine great-circle distance between two coordinates in miles.
///
/// This is a straight-line estimate, not a routed road distance; callers
/// label it as approximate (e.g. "~12.3 miles").
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lng1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lng2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlng = (dlng * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Display-facing trip distance: lifts over absent endpoints and rounds to
/// one decimal place. `None` means "distance unknown" and renders as "N/A".
pub fn trip_miles(a: Option<Coordinate>, b: Option<Coordinate>) -> Option<f64> {
    let (a, b) = a.zip(b)?;
    Some(round_tenth(distance_miles(a, b)))
}

fn round_tenth(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}
