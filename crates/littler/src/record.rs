//! Observation records and their derivation from raw station reports.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::error::LittlerError;
use crate::translit::transliterate;

/// Sentinel for missing or unavailable numeric fields, as expected by
/// the observation nudging reader.
pub const MISSING: f64 = -888888.0;

/// WMO code reported for surface synoptic station records.
pub const FM_CODE_SURFACE: &str = "FM-12";

/// Static per-station metadata joined onto raw observations.
#[derive(Debug, Clone, PartialEq)]
pub struct StationInfo {
    /// Human-readable station name (may contain diacritics).
    pub name: String,
    /// Station latitude in degrees.
    pub lat: f64,
    /// Station longitude in degrees.
    pub lon: f64,
    /// Station elevation in meters.
    pub elevation: f64,
}

/// One raw station report, straight from the provider.
///
/// Field units follow the Geosphere parameter conventions: wind in m/s,
/// direction in meteorological degrees, temperature in Celsius,
/// pressures in hPa, precipitation in mm. Any field the provider left
/// empty stays `None` and becomes the [`MISSING`] sentinel downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
    /// Station identifier.
    pub station: String,
    /// Observation timestamp.
    pub time: NaiveDateTime,
    /// Wind speed (`ff`), m/s.
    pub wind_speed: Option<f64>,
    /// Wind direction (`dd`), degrees.
    pub wind_direction: Option<f64>,
    /// 2 m air temperature (`tl`), Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity (`rf`), percent.
    pub relative_humidity: Option<f64>,
    /// Station pressure (`p`), hPa.
    pub station_pressure: Option<f64>,
    /// Reduced sea-level pressure (`pred`), hPa.
    pub sea_level_pressure: Option<f64>,
    /// Precipitation sum (`rr`), mm.
    pub precipitation: Option<f64>,
}

/// A fully derived observation, ready for the fixed-width writer.
///
/// All pressures are in Pa, temperature in Kelvin, winds in m/s.
/// Missing inputs carry the [`MISSING`] sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRecord {
    /// Station identifier.
    pub id: String,
    /// ASCII-transliterated station name.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Elevation in meters.
    pub elevation: f64,
    /// Observation timestamp.
    pub time: NaiveDateTime,
    /// Sea-level pressure, Pa.
    pub slp: f64,
    /// 2 m temperature, K.
    pub t2m_k: f64,
    /// Zonal wind component, m/s.
    pub u: f64,
    /// Meridional wind component, m/s.
    pub v: f64,
    /// Relative humidity, percent.
    pub relative_humidity: f64,
    /// Surface (station) pressure, Pa.
    pub surface_pressure: f64,
    /// Precipitation, mm.
    pub precipitation: f64,
    /// Data source label written into the record header.
    pub source: String,
    /// Reverse row index; higher numbers are older rows.
    pub sequence_number: usize,
    /// Bogus-observation flag.
    pub bogus: bool,
}

impl ObservationRecord {
    /// Timestamp formatted the way the record header expects it.
    pub fn date_string(&self) -> String {
        self.time.format("%Y%m%d%H%M%S").to_string()
    }
}

/// Derives writer-ready records from raw reports and station metadata.
///
/// Rows are sorted ascending by timestamp before sequence numbers are
/// assigned (`n-1` down to `0`), since the sequence number encodes
/// recency via row position. Sea-level pressure falls back to a
/// reduction of the station pressure at sensor height (elevation + 2 m)
/// when the provider did not report it.
///
/// # Errors
///
/// Returns [`LittlerError::UnknownStation`] when a report references a
/// station absent from `stations`.
pub fn build_records(
    mut raws: Vec<RawObservation>,
    stations: &BTreeMap<String, StationInfo>,
    source: &str,
) -> Result<Vec<ObservationRecord>, LittlerError> {
    raws.sort_by_key(|r| r.time);

    let n = raws.len();
    let mut records = Vec::with_capacity(n);

    for (i, raw) in raws.into_iter().enumerate() {
        let info = stations
            .get(&raw.station)
            .ok_or_else(|| LittlerError::UnknownStation {
                station: raw.station.clone(),
            })?;

        let t2m_k = raw.temperature.map_or(MISSING, |t| t + 273.15);

        let (u, v) = match (raw.wind_speed, raw.wind_direction) {
            (Some(ff), Some(dd)) => (
                boreas_met::u_from_vector(ff, dd),
                boreas_met::v_from_vector(ff, dd),
            ),
            _ => (MISSING, MISSING),
        };

        // Reported reduction wins; otherwise reduce the station pressure
        // ourselves. Both paths scale hPa to Pa.
        let slp = match raw.sea_level_pressure {
            Some(pred) => pred * 100.0,
            None => match (raw.station_pressure, raw.temperature) {
                (Some(p), Some(_)) => {
                    boreas_met::slp_from_station_pressure(p, info.elevation + 2.0, t2m_k) * 100.0
                }
                _ => MISSING,
            },
        };

        records.push(ObservationRecord {
            id: raw.station,
            name: transliterate(&info.name),
            latitude: info.lat,
            longitude: info.lon,
            elevation: info.elevation,
            time: raw.time,
            slp,
            t2m_k,
            u,
            v,
            relative_humidity: raw.relative_humidity.unwrap_or(MISSING),
            surface_pressure: raw.station_pressure.map_or(MISSING, |p| p * 100.0),
            precipitation: raw.precipitation.unwrap_or(MISSING),
            source: source.to_string(),
            sequence_number: n - 1 - i,
            bogus: false,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn station_map() -> BTreeMap<String, StationInfo> {
        BTreeMap::from([(
            "11290".to_string(),
            StationInfo {
                name: "Graz-Universität".to_string(),
                lat: 47.08,
                lon: 15.45,
                elevation: 366.0,
            },
        )])
    }

    fn raw(day: u32, hour: u32) -> RawObservation {
        RawObservation {
            station: "11290".to_string(),
            time: ts(day, hour),
            wind_speed: Some(3.0),
            wind_direction: Some(90.0),
            temperature: Some(18.5),
            relative_humidity: Some(65.0),
            station_pressure: Some(970.0),
            sea_level_pressure: Some(1012.3),
            precipitation: Some(0.0),
        }
    }

    #[test]
    fn sequence_numbers_decrease_with_time() {
        let raws = vec![raw(2, 0), raw(1, 0), raw(1, 12)];
        let records = build_records(raws, &station_map(), "test").unwrap();
        assert_eq!(records[0].time, ts(1, 0));
        let seqs: Vec<usize> = records.iter().map(|r| r.sequence_number).collect();
        assert_eq!(seqs, vec![2, 1, 0]);
    }

    #[test]
    fn name_is_transliterated() {
        let records = build_records(vec![raw(1, 0)], &station_map(), "test").unwrap();
        assert_eq!(records[0].name, "Graz-Universitaet");
    }

    #[test]
    fn pressures_are_scaled_to_pascal() {
        let records = build_records(vec![raw(1, 0)], &station_map(), "test").unwrap();
        assert_eq!(records[0].slp, 101_230.0);
        assert_eq!(records[0].surface_pressure, 97_000.0);
    }

    #[test]
    fn slp_falls_back_to_station_pressure_reduction() {
        let mut r = raw(1, 0);
        r.sea_level_pressure = None;
        let records = build_records(vec![r], &station_map(), "test").unwrap();
        let expected =
            boreas_met::slp_from_station_pressure(970.0, 368.0, 18.5 + 273.15) * 100.0;
        assert!((records[0].slp - expected).abs() < 1e-9);
        assert!(records[0].slp > 97_000.0);
    }

    #[test]
    fn missing_inputs_become_sentinels() {
        let mut r = raw(1, 0);
        r.wind_speed = None;
        r.temperature = None;
        r.sea_level_pressure = None;
        r.precipitation = None;
        let records = build_records(vec![r], &station_map(), "test").unwrap();
        let rec = &records[0];
        assert_eq!(rec.u, MISSING);
        assert_eq!(rec.v, MISSING);
        assert_eq!(rec.t2m_k, MISSING);
        assert_eq!(rec.slp, MISSING);
        assert_eq!(rec.precipitation, MISSING);
    }

    #[test]
    fn unknown_station_is_an_error() {
        let mut r = raw(1, 0);
        r.station = "99999".to_string();
        let err = build_records(vec![r], &station_map(), "test").unwrap_err();
        assert!(matches!(err, LittlerError::UnknownStation { .. }));
    }

    #[test]
    fn date_string_is_compact_14_chars() {
        let records = build_records(vec![raw(1, 6)], &station_map(), "test").unwrap();
        assert_eq!(records[0].date_string(), "20240601060000");
    }
}
