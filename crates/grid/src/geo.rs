//! Meters-to-degrees conversions on a spherical Earth.

/// Meters per degree of latitude.
pub const METERS_PER_DEG_LAT: f64 = 110_574.0;

/// Meters per degree of longitude at the equator.
pub const METERS_PER_DEG_LON: f64 = 111_320.0;

/// Converts a north-south distance in meters to degrees of latitude.
pub fn meter_to_lat(meters: f64) -> f64 {
    meters / METERS_PER_DEG_LAT
}

/// Converts an east-west distance in meters to degrees of longitude at
/// the given latitude.
pub fn meter_to_lon(meters: f64, lat: f64) -> f64 {
    meters / (METERS_PER_DEG_LON * lat.to_radians().cos())
}
