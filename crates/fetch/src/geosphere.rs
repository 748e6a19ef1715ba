//! Geosphere Austria dataset API: URL assembly and station metadata.
//!
//! The hub serves resources under `/v1/{type}/{mode}/{resource}`; data
//! queries are plain GET requests with repeated `parameters=` and
//! `station_ids=` pairs, and every resource exposes a `/metadata`
//! endpoint describing its stations and parameters.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// Base URL of the Geosphere dataset hub.
pub const BASE_URL: &str = "https://dataset.api.hub.geosphere.at";

/// API version segment.
pub const API_VERSION: &str = "v1";

/// The station parameters WRF observation nudging consumes.
pub const WRF_FDDA_PARAMETERS: &[&str] = &["ff", "dd", "tl", "rf", "p", "pred", "rr"];

/// Timestamp format the hub expects in query windows.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// Kind of resource being queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetType {
    /// Gridded products.
    Grid,
    /// Derived time series.
    Timeseries,
    /// Station measurements.
    Station,
}

impl DatasetType {
    /// URL path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Timeseries => "timeseries",
            Self::Station => "station",
        }
    }
}

/// Temporal mode of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetMode {
    /// Quality-controlled history.
    Historical,
    /// Rolling current data.
    Current,
    /// Model forecasts.
    Forecast,
}

impl DatasetMode {
    /// URL path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Historical => "historical",
            Self::Current => "current",
            Self::Forecast => "forecast",
        }
    }
}

/// One addressable resource on the hub, e.g. station/historical/klima-v2-10min.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeosphereDataset {
    dataset_type: DatasetType,
    mode: DatasetMode,
    resource: String,
}

impl GeosphereDataset {
    /// Creates a resource handle.
    pub fn new(dataset_type: DatasetType, mode: DatasetMode, resource: impl Into<String>) -> Self {
        Self {
            dataset_type,
            mode,
            resource: resource.into(),
        }
    }

    /// Resource identifier (e.g. `klima-v2-10min`).
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Base URL of the resource.
    pub fn dataset_url(&self) -> String {
        format!(
            "{BASE_URL}/{API_VERSION}/{}/{}/{}",
            self.dataset_type.as_str(),
            self.mode.as_str(),
            self.resource
        )
    }

    /// URL of the resource's metadata document.
    pub fn metadata_url(&self) -> String {
        format!("{}/metadata", self.dataset_url())
    }

    /// Assembles a CSV data query for the given parameters, stations and
    /// time window.
    pub fn data_url(
        &self,
        parameters: &[String],
        station_ids: &[String],
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> String {
        let mut query = String::new();
        for p in parameters {
            query.push_str(&format!("parameters={p}&"));
        }
        query.push_str(&format!(
            "start={}&end={}&",
            start.format(TIMESTAMP_FORMAT),
            end.format(TIMESTAMP_FORMAT)
        ));
        for s in station_ids {
            query.push_str(&format!("station_ids={s}&"));
        }
        query.push_str("output_format=csv");
        format!("{}?{}", self.dataset_url(), query)
    }
}

/// Station entry from a resource metadata document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Station {
    /// Station identifier.
    pub id: String,
    /// Station name as published (may contain diacritics).
    pub name: String,
    /// Federal state the station sits in.
    #[serde(default)]
    pub state: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Elevation in meters.
    pub altitude: f64,
    /// Whether the station currently reports.
    #[serde(default)]
    pub is_active: bool,
    /// Station type label; `COMBINED` entries duplicate other stations.
    #[serde(rename = "type", default)]
    pub station_type: String,
}

/// Parameter entry from a resource metadata document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Parameter {
    /// Short parameter code (e.g. `tl`).
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub long_name: String,
    /// Measurement unit.
    #[serde(default)]
    pub unit: String,
}

/// Parsed resource metadata.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Metadata {
    /// All stations of the resource.
    pub stations: Vec<Station>,
    /// All parameters of the resource.
    pub parameters: Vec<Parameter>,
}

impl Metadata {
    /// Decodes a metadata JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Json`](crate::FetchError::Json) when the
    /// document does not match the expected structure.
    pub fn from_json(text: &str) -> Result<Self, crate::FetchError> {
        serde_json::from_str(text).map_err(|e| crate::FetchError::Json {
            reason: e.to_string(),
        })
    }

    /// Stations located in any of the given federal states.
    ///
    /// `COMBINED` stations are always excluded; `active_only` further
    /// restricts to currently reporting stations.
    pub fn stations_in_states(&self, states: &[&str], active_only: bool) -> Vec<&Station> {
        self.stations
            .iter()
            .filter(|s| states.contains(&s.state.as_str()))
            .filter(|s| s.station_type != "COMBINED")
            .filter(|s| !active_only || s.is_active)
            .collect()
    }

    /// Looks up a station by identifier.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }
}
