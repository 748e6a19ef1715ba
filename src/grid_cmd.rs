//! The `grid` subcommand: compute nested domains and print a report.

use anyhow::{Context, Result};
use tracing::info;

use boreas_grid::{compute_grid, nominal_spacings_km};
use boreas_namelist::Namelist;

use crate::cli::GridArgs;

pub fn run(args: &GridArgs) -> Result<()> {
    let namelist = Namelist::from_path(&args.namelist)
        .with_context(|| format!("failed to read namelist: {}", args.namelist.display()))?;

    let grids = compute_grid(&namelist).context("failed to compute domain grids")?;
    let spacings = nominal_spacings_km(&namelist).context("failed to derive domain spacings")?;
    info!(n_domains = grids.len(), "computed nested grids");

    for (i, (grid, spacing_km)) in grids.iter().zip(&spacings).enumerate() {
        let (lon_min, lon_max, lat_min, lat_max) = grid.extent();
        println!("domain {:02}", i + 1);
        println!(
            "  center    {:.4} N  {:.4} E",
            grid.center_lat(),
            grid.center_lon()
        );
        println!("  longitude {lon_min:.4} .. {lon_max:.4}  ({} points)", grid.lons().len());
        println!("  latitude  {lat_min:.4} .. {lat_max:.4}  ({} points)", grid.lats().len());
        println!("  spacing   {spacing_km:.3} km");
    }

    Ok(())
}
