//! Pure conversions from CLI/TOML values into crate types.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use boreas_fetch::gfs::{GridResolution, Subregion};
use boreas_fetch::DateRange;

use crate::cli::GfsArgs;
use crate::config::FetchToml;

/// Parses a `YYYY-MM-DD` calendar day.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {s}"))
}

/// Builds the inclusive request window from the shared start/end flags.
pub fn parse_range(start: &str, end: &str) -> Result<DateRange> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    DateRange::new(start, end).context("invalid date range")
}

/// Parses the configured grid resolution label.
pub fn parse_grid(fetch: &FetchToml) -> Result<GridResolution> {
    GridResolution::parse(&fetch.grid)
        .with_context(|| format!("invalid grid resolution in config: {}", fetch.grid))
}

/// Builds the download subregion from config, with CLI flags taking
/// precedence where given.
pub fn build_subregion(fetch: &FetchToml, args: &GfsArgs) -> Subregion {
    Subregion {
        bottom: args.bottom.unwrap_or(fetch.bottom),
        top: args.top.unwrap_or(fetch.top),
        left: args.left.unwrap_or(fetch.left),
        right: args.right.unwrap_or(fetch.right),
    }
}

/// Builds the download subregion from config alone.
pub fn build_subregion_default(fetch: &FetchToml) -> Subregion {
    Subregion {
        bottom: fetch.bottom,
        top: fetch.top,
        left: fetch.left,
        right: fetch.right,
    }
}
