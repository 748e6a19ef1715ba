//! ERA5 request bodies for the Copernicus Climate Data Store.
//!
//! The CDS retrieval API takes a JSON request per dataset; this module
//! assembles the two requests the WRF workflow needs (pressure levels
//! and single levels) with the variable sets, 3-hourly times and level
//! stack the model's preprocessor expects.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::daterange::DateRange;
use crate::gfs::{GridResolution, Subregion};

/// CDS dataset holding the ERA5 pressure-level reanalysis.
pub const PRESSURE_DATASET: &str = "reanalysis-era5-pressure-levels";

/// CDS dataset holding the ERA5 single-level reanalysis.
pub const SURFACE_DATASET: &str = "reanalysis-era5-single-levels";

/// Variables requested on pressure levels.
const PRESSURE_VARIABLES: &[&str] = &[
    "geopotential",
    "relative_humidity",
    "specific_humidity",
    "temperature",
    "u_component_of_wind",
    "v_component_of_wind",
];

/// Variables requested on single levels.
const SURFACE_VARIABLES: &[&str] = &[
    "10m_u_component_of_wind",
    "10m_v_component_of_wind",
    "2m_dewpoint_temperature",
    "2m_temperature",
    "mean_sea_level_pressure",
    "sea_surface_temperature",
    "surface_pressure",
    "total_precipitation",
    "skin_temperature",
    "surface_latent_heat_flux",
    "top_net_solar_radiation_clear_sky",
    "snow_depth",
    "soil_temperature_level_1",
    "soil_temperature_level_2",
    "soil_temperature_level_3",
    "soil_temperature_level_4",
    "soil_type",
    "volumetric_soil_water_layer_1",
    "volumetric_soil_water_layer_2",
    "volumetric_soil_water_layer_3",
    "volumetric_soil_water_layer_4",
    "leaf_area_index_high_vegetation",
    "geopotential",
    "land_sea_mask",
    "sea_ice_cover",
];

/// The full ERA5 pressure-level stack, hPa.
const PRESSURE_LEVELS: &[&str] = &[
    "1", "2", "3", "5", "7", "10", "20", "30", "50", "70", "100", "125", "150", "175", "200",
    "225", "250", "300", "350", "400", "450", "500", "550", "600", "650", "700", "750", "775",
    "800", "825", "850", "875", "900", "925", "950", "975", "1000",
];

/// 3-hourly analysis times.
const TIMES: &[&str] = &[
    "00:00", "03:00", "06:00", "09:00", "12:00", "15:00", "18:00", "21:00",
];

/// Output format of a CDS retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era5Format {
    /// GRIB edition 1/2 as stored in MARS.
    Grib,
    /// Converted NetCDF.
    NetCdf,
}

impl Era5Format {
    /// The `data_format` request value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grib => "grib",
            Self::NetCdf => "netcdf",
        }
    }

    /// File extension for downloaded results.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Grib => "grib",
            Self::NetCdf => "nc",
        }
    }
}

/// A CDS retrieval request body.
///
/// Serializes to the JSON structure the CDS API expects; `None` fields
/// are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct CdsRequest {
    product_type: Vec<String>,
    variable: Vec<String>,
    year: Vec<String>,
    month: Vec<String>,
    day: Vec<String>,
    time: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pressure_level: Option<Vec<String>>,
    data_format: String,
    download_format: String,
    /// North, west, south, east.
    area: [i32; 4],
    grid: String,
}

impl CdsRequest {
    /// Serializes the request to pretty JSON for logging or dry runs.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("request body serializes")
    }

    /// The requested variables.
    pub fn variables(&self) -> &[String] {
        &self.variable
    }

    /// The pressure levels, if this is a pressure-level request.
    pub fn pressure_levels(&self) -> Option<&[String]> {
        self.pressure_level.as_deref()
    }
}

/// Builds the pressure-level retrieval request.
pub fn pressure_level_request(
    range: &DateRange,
    subregion: Subregion,
    grid: GridResolution,
    format: Era5Format,
) -> CdsRequest {
    let mut req = base_request(range, subregion, grid, format, PRESSURE_VARIABLES);
    req.pressure_level = Some(PRESSURE_LEVELS.iter().map(|s| s.to_string()).collect());
    req
}

/// Builds the single-level retrieval request.
pub fn surface_request(
    range: &DateRange,
    subregion: Subregion,
    grid: GridResolution,
    format: Era5Format,
) -> CdsRequest {
    base_request(range, subregion, grid, format, SURFACE_VARIABLES)
}

fn base_request(
    range: &DateRange,
    subregion: Subregion,
    grid: GridResolution,
    format: Era5Format,
    variables: &[&str],
) -> CdsRequest {
    // CDS takes the cartesian product of year/month/day, so deduplicated
    // components are enough to cover the range.
    let mut years = BTreeSet::new();
    let mut months = BTreeSet::new();
    let mut days = BTreeSet::new();
    for day in range.days() {
        years.insert(day.format("%Y").to_string());
        months.insert(day.format("%m").to_string());
        days.insert(day.format("%d").to_string());
    }

    CdsRequest {
        product_type: vec!["reanalysis".to_string()],
        variable: variables.iter().map(|s| s.to_string()).collect(),
        year: years.into_iter().collect(),
        month: months.into_iter().collect(),
        day: days.into_iter().collect(),
        time: TIMES.iter().map(|s| s.to_string()).collect(),
        pressure_level: None,
        data_format: format.as_str().to_string(),
        download_format: "unarchived".to_string(),
        area: [
            subregion.top,
            subregion.left,
            subregion.bottom,
            subregion.right,
        ],
        grid: grid.cds_grid().to_string(),
    }
}
