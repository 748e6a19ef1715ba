//! The `fetch` subcommand family: GFS, ERA5, Geosphere.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, warn};

use boreas_fetch::era5::{pressure_level_request, surface_request, Era5Format, PRESSURE_DATASET, SURFACE_DATASET};
use boreas_fetch::geosphere::{DatasetMode, DatasetType, GeosphereDataset, Metadata};
use boreas_fetch::{plan_gfs, Downloader};

use crate::cli::{Era5Args, FetchSource, GeosphereArgs, GfsArgs};
use crate::config::BoreasConfig;
use crate::convert;

pub fn run(source: &FetchSource) -> Result<()> {
    match source {
        FetchSource::Gfs(args) => run_gfs(args),
        FetchSource::Era5(args) => run_era5(args),
        FetchSource::Geosphere(args) => run_geosphere(args),
    }
}

fn downloader(config: &BoreasConfig) -> Downloader {
    Downloader::new(&config.fetch.savefolder)
        .with_max_sleep(Duration::from_secs_f64(config.fetch.max_sleep_secs))
}

fn run_gfs(args: &GfsArgs) -> Result<()> {
    let config = BoreasConfig::load(&args.window.config)?;
    let range = convert::parse_range(&args.window.start, &args.window.end)?;
    let subregion = convert::build_subregion(&config.fetch, args);
    let grid = convert::parse_grid(&config.fetch)?;

    let today = Local::now().date_naive();
    let plan = plan_gfs(&range, subregion, grid, today).context("failed to plan GFS downloads")?;
    info!(
        n_files = plan.files().len(),
        archive = plan.uses_archive(),
        "planned GFS downloads"
    );

    if args.window.dry_run {
        for file in plan.files() {
            println!("{}  <-  {}", file.filename, file.url);
        }
        return Ok(());
    }

    let downloader = downloader(&config);
    for file in plan.files() {
        downloader
            .download(&file.url, &file.filename)
            .with_context(|| format!("failed to download {}", file.filename))?;
    }
    println!(
        "downloaded {} files into {}",
        plan.files().len(),
        downloader.savefolder().display()
    );
    Ok(())
}

fn run_era5(args: &Era5Args) -> Result<()> {
    let config = BoreasConfig::load(&args.window.config)?;
    let range = convert::parse_range(&args.window.start, &args.window.end)?;
    let subregion = convert::build_subregion_default(&config.fetch);
    let grid = convert::parse_grid(&config.fetch)?;
    let format = if args.netcdf {
        Era5Format::NetCdf
    } else {
        Era5Format::Grib
    };

    let pressure = pressure_level_request(&range, subregion, grid, format);
    let surface = surface_request(&range, subregion, grid, format);

    if args.window.dry_run {
        println!("# {PRESSURE_DATASET}");
        println!("{}", pressure.to_json());
        println!("# {SURFACE_DATASET}");
        println!("{}", surface.to_json());
        return Ok(());
    }

    // Submission needs a registered CDS account; the assembled bodies are
    // written out for the cdsapi client instead.
    let folder = &config.fetch.savefolder;
    std::fs::create_dir_all(folder)
        .with_context(|| format!("failed to create {}", folder.display()))?;
    for (dataset, request) in [(PRESSURE_DATASET, &pressure), (SURFACE_DATASET, &surface)] {
        let path = folder.join(format!("{dataset}.json"));
        std::fs::write(&path, request.to_json())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    warn!("submit the request bodies with a CDS API client; no account is configured here");
    Ok(())
}

fn run_geosphere(args: &GeosphereArgs) -> Result<()> {
    let config = BoreasConfig::load(&args.window.config)?;
    let range = convert::parse_range(&args.window.start, &args.window.end)?;

    let dataset = GeosphereDataset::new(
        dataset_type(&config.geosphere.dataset_type)?,
        dataset_mode(&config.geosphere.mode)?,
        config.geosphere.resource.clone(),
    );
    let downloader = downloader(&config);

    let metadata = match &args.metadata {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read metadata: {}", path.display()))?;
            Metadata::from_json(&text).context("failed to parse metadata JSON")?
        }
        None => downloader
            .fetch_metadata(&dataset.metadata_url())
            .context("failed to fetch resource metadata")?,
    };

    let states: Vec<&str> = args.states.iter().map(String::as_str).collect();
    let stations = metadata.stations_in_states(&states, true);
    if stations.is_empty() {
        anyhow::bail!("no active stations found in states: {}", args.states.join(", "));
    }
    info!(n_stations = stations.len(), "selected stations");

    let station_ids: Vec<String> = stations.iter().map(|s| s.id.clone()).collect();
    let start = range
        .start()
        .and_hms_opt(0, 0, 0)
        .context("invalid start time")?;
    let end = range
        .end()
        .and_hms_opt(23, 59, 59)
        .context("invalid end time")?;
    let url = dataset.data_url(&config.geosphere.parameters, &station_ids, start, end);

    if args.window.dry_run {
        println!("{url}");
        return Ok(());
    }

    let path = downloader
        .download(&url, &args.output)
        .context("failed to download station observations")?;
    println!("wrote {}", path.display());
    Ok(())
}

fn dataset_type(s: &str) -> Result<DatasetType> {
    match s {
        "grid" => Ok(DatasetType::Grid),
        "timeseries" => Ok(DatasetType::Timeseries),
        "station" => Ok(DatasetType::Station),
        other => anyhow::bail!("unknown dataset type in config: {other}"),
    }
}

fn dataset_mode(s: &str) -> Result<DatasetMode> {
    match s {
        "historical" => Ok(DatasetMode::Historical),
        "current" => Ok(DatasetMode::Current),
        "forecast" => Ok(DatasetMode::Forecast),
        other => anyhow::bail!("unknown dataset mode in config: {other}"),
    }
}
