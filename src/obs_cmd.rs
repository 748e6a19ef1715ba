//! The `obs` subcommand: station CSV plus resource metadata in, one
//! OBS_DOMAIN nudging file out.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

use boreas_fetch::geosphere::Metadata;
use boreas_littler::{build_records, write_obs_domain, RawObservation, RecordShape, StationInfo};

use crate::cli::ObsArgs;
use crate::config::BoreasConfig;

/// One CSV row as served by the Geosphere hub.
#[derive(Debug, Deserialize)]
struct CsvRow {
    station: String,
    time: String,
    #[serde(default)]
    ff: Option<f64>,
    #[serde(default)]
    dd: Option<f64>,
    #[serde(default)]
    tl: Option<f64>,
    #[serde(default)]
    rf: Option<f64>,
    #[serde(default)]
    p: Option<f64>,
    #[serde(default)]
    pred: Option<f64>,
    #[serde(default)]
    rr: Option<f64>,
}

pub fn run(args: &ObsArgs) -> Result<()> {
    let config = BoreasConfig::load(&args.config)?;

    let stations = load_stations(&args.metadata)?;
    let raws = read_observations(&args.input)?;
    info!(
        n_rows = raws.len(),
        n_stations = stations.len(),
        "loaded observations"
    );

    let records = build_records(raws, &stations, &config.obs.source)
        .context("failed to derive observation records")?;

    let prefix = args.prefix.as_deref().unwrap_or(&config.obs.prefix);
    let path = write_obs_domain(&records, args.domain, prefix, RecordShape::Surface)
        .context("failed to write observation file")?;
    println!("wrote {} records to {}", records.len(), path.display());

    Ok(())
}

/// Reads a resource metadata JSON and indexes its stations by id.
fn load_stations(path: &Path) -> Result<BTreeMap<String, StationInfo>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read metadata: {}", path.display()))?;
    let metadata = Metadata::from_json(&text).context("failed to parse metadata JSON")?;

    Ok(metadata
        .stations
        .iter()
        .map(|s| {
            (
                s.id.clone(),
                StationInfo {
                    name: s.name.clone(),
                    lat: s.lat,
                    lon: s.lon,
                    elevation: s.altitude,
                },
            )
        })
        .collect())
}

/// Reads the station observation CSV into raw reports.
fn read_observations(path: &Path) -> Result<Vec<RawObservation>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open observations: {}", path.display()))?;

    let mut raws = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result.context("malformed observation row")?;
        let time = parse_time(&row.time)
            .with_context(|| format!("unparseable timestamp: {}", row.time))?;
        raws.push(RawObservation {
            station: row.station,
            time,
            wind_speed: row.ff,
            wind_direction: row.dd,
            temperature: row.tl,
            relative_humidity: row.rf,
            station_pressure: row.p,
            sea_level_pressure: row.pred,
            precipitation: row.rr,
        });
    }
    Ok(raws)
}

/// Parses the timestamp formats the hub has been observed to serve.
///
/// Offset-bearing timestamps are converted to UTC; bare timestamps are
/// taken as UTC directly.
fn parse_time(s: &str) -> Result<NaiveDateTime> {
    const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M%z"];
    const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

    if let Ok(t) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(t.naive_utc());
    }
    for format in OFFSET_FORMATS {
        if let Ok(t) = chrono::DateTime::parse_from_str(s, format) {
            return Ok(t.naive_utc());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(t);
        }
    }
    bail!("timestamp does not match any supported format: {s}")
}
