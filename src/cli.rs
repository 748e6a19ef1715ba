use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Boreas WRF pre-processing toolkit.
#[derive(Parser)]
#[command(
    name = "boreas",
    version,
    about = "WRF pre-processing: nested grids, observation nudging input, model data retrieval"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute and report nested domain grids from a WPS namelist.
    Grid(GridArgs),
    /// Convert station observations into an OBS_DOMAIN nudging file.
    Obs(ObsArgs),
    /// Plan and run model/reanalysis/observation downloads.
    #[command(subcommand)]
    Fetch(FetchSource),
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    /// Path to the WPS namelist.
    #[arg(short, long, default_value = "namelist.wps")]
    pub namelist: PathBuf,
}

/// Arguments for the `obs` subcommand.
#[derive(clap::Args)]
pub struct ObsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "boreas.toml")]
    pub config: PathBuf,

    /// Station observation CSV as served by the Geosphere hub.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Resource metadata JSON holding station coordinates and names.
    #[arg(short, long)]
    pub metadata: PathBuf,

    /// WRF domain number the observations nudge.
    #[arg(short, long)]
    pub domain: u32,

    /// Override the output file prefix from config.
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Data sources for the `fetch` subcommand.
#[derive(Subcommand)]
pub enum FetchSource {
    /// GFS analyses/forecasts via NOMADS or the NCAR archive.
    Gfs(GfsArgs),
    /// ERA5 reanalysis request bodies for the Climate Data Store.
    Era5(Era5Args),
    /// Geosphere Austria station observations.
    Geosphere(GeosphereArgs),
}

/// Shared date-window and config flags for fetch subcommands.
#[derive(clap::Args)]
pub struct FetchWindow {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "boreas.toml")]
    pub config: PathBuf,

    /// First day of the request window (YYYY-MM-DD).
    #[arg(long)]
    pub start: String,

    /// Last day of the request window (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub end: String,

    /// Print the plan without touching the network.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `fetch gfs`.
#[derive(clap::Args)]
pub struct GfsArgs {
    #[command(flatten)]
    pub window: FetchWindow,

    /// Override the southern latitude bound from config.
    #[arg(long)]
    pub bottom: Option<i32>,

    /// Override the northern latitude bound from config.
    #[arg(long)]
    pub top: Option<i32>,

    /// Override the western longitude bound from config (0..360 east).
    #[arg(long)]
    pub left: Option<i32>,

    /// Override the eastern longitude bound from config (0..360 east).
    #[arg(long)]
    pub right: Option<i32>,
}

/// Arguments for `fetch era5`.
#[derive(clap::Args)]
pub struct Era5Args {
    #[command(flatten)]
    pub window: FetchWindow,

    /// Request NetCDF instead of GRIB.
    #[arg(long)]
    pub netcdf: bool,
}

/// Arguments for `fetch geosphere`.
#[derive(clap::Args)]
pub struct GeosphereArgs {
    #[command(flatten)]
    pub window: FetchWindow,

    /// Federal states whose stations to query.
    #[arg(long, required = true, num_args = 1..)]
    pub states: Vec<String>,

    /// Use an already-downloaded metadata JSON instead of fetching it.
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Output CSV file name.
    #[arg(short, long, default_value = "geosphere.csv")]
    pub output: String,
}
