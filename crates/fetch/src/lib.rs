//! Download glue for the boreas toolkit.
//!
//! Three public data sources feed the WRF workflow:
//!
//! - [`gfs`]: the NOMADS grib filter for recent analyses and forecasts,
//!   with the NCAR RDA FNL archive as fallback for older dates.
//! - [`era5`]: request bodies for the Copernicus Climate Data Store
//!   pressure-level and single-level reanalysis retrievals.
//! - [`geosphere`]: the Geosphere Austria dataset hub serving station
//!   observations and their metadata.
//!
//! Planning (URL and request assembly) is pure and deterministic —
//! "today" is a parameter, not the wall clock — so plans can be
//! inspected in dry runs and tested without network access. The actual
//! transfer goes through [`Downloader`], a small blocking client with
//! randomized pacing between requests.

pub mod client;
pub mod daterange;
pub mod era5;
pub mod error;
pub mod geosphere;
pub mod gfs;

pub use client::Downloader;
pub use daterange::DateRange;
pub use error::FetchError;
pub use gfs::{GfsPlan, GridResolution, PlannedFile, Subregion, plan_gfs};
