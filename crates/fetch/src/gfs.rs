//! GFS download planning: NOMADS grib filter for recent and forecast
//! dates, the NCAR RDA FNL archive for older analyses.

use chrono::{Days, Duration, NaiveDate, Timelike};

use crate::daterange::DateRange;
use crate::error::FetchError;

/// NOMADS grib filter endpoint for the 1-degree GFS.
const NOMADS_FILTER_URL: &str = "https://nomads.ncep.noaa.gov/cgi-bin/filter_gfs_1p00.pl";

/// NCAR RDA archive of the GFS FNL analyses (dataset d083002).
const RDA_ARCHIVE_URL: &str = "https://data.rda.ucar.edu/d083002/grib2/";

/// NOMADS only keeps roughly the last week and a half online.
const NOMADS_RETENTION_DAYS: u64 = 9;

/// Largest number of days a single plan may cover.
const MAX_DATES: usize = 20;

/// Analysis cycles available per day.
const CYCLES: [u32; 4] = [0, 6, 12, 18];

/// GFS horizontal resolution label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridResolution {
    /// 1.0 degree.
    OneDeg,
    /// 0.5 degree.
    HalfDeg,
    /// 0.25 degree.
    QuarterDeg,
}

impl GridResolution {
    /// The label used in NOMADS paths and file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneDeg => "1p00",
            Self::HalfDeg => "0p50",
            Self::QuarterDeg => "0p25",
        }
    }

    /// The CDS `grid` request value for the same resolution.
    pub fn cds_grid(&self) -> &'static str {
        match self {
            Self::OneDeg => "1.0/1.0",
            Self::HalfDeg => "0.5/0.5",
            Self::QuarterDeg => "0.25/0.25",
        }
    }

    /// Parses a resolution label such as `1p00`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::UnsupportedGrid`] for unknown labels.
    pub fn parse(s: &str) -> Result<Self, FetchError> {
        match s {
            "1p00" => Ok(Self::OneDeg),
            "0p50" => Ok(Self::HalfDeg),
            "0p25" => Ok(Self::QuarterDeg),
            other => Err(FetchError::UnsupportedGrid {
                grid: other.to_string(),
            }),
        }
    }
}

/// Rectangular subregion in whole degrees, longitudes 0..360 east.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subregion {
    /// Southern latitude bound.
    pub bottom: i32,
    /// Northern latitude bound.
    pub top: i32,
    /// Western longitude bound.
    pub left: i32,
    /// Eastern longitude bound.
    pub right: i32,
}

impl Default for Subregion {
    fn default() -> Self {
        Self {
            bottom: 10,
            top: 70,
            left: 0,
            right: 360,
        }
    }
}

/// One planned download: a full URL and the local file name to save as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Fully assembled request URL.
    pub url: String,
    /// Local file name (`GFS_*.grib2`).
    pub filename: String,
}

/// A complete GFS download plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfsPlan {
    files: Vec<PlannedFile>,
    archive: bool,
}

impl GfsPlan {
    /// Planned downloads in chronological order.
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// `true` when the plan targets the NCAR archive rather than NOMADS.
    pub fn uses_archive(&self) -> bool {
        self.archive
    }
}

/// Plans GFS downloads for the given range and subregion.
///
/// Dates recent enough for NOMADS (or in the future) go through the grib
/// filter endpoint: one `f000` analysis per 6-hourly cycle for past days,
/// and 6-hourly forecast steps from the 00 cycle of the first forecast
/// day onward. Older ranges fall back to the NCAR RDA FNL archive, which
/// serves global files only (the subregion is ignored there).
///
/// `today` is passed in rather than read from the clock so plans are
/// reproducible.
///
/// # Errors
///
/// Returns [`FetchError::UnsupportedGrid`] for anything but the 1p00
/// grid, [`FetchError::TooManyDates`] for ranges over 20 days, and
/// [`FetchError::NegativeLongitude`] for signed longitudes on the
/// NOMADS path.
pub fn plan_gfs(
    range: &DateRange,
    subregion: Subregion,
    grid: GridResolution,
    today: NaiveDate,
) -> Result<GfsPlan, FetchError> {
    if grid != GridResolution::OneDeg {
        return Err(FetchError::UnsupportedGrid {
            grid: grid.as_str().to_string(),
        });
    }

    let days = range.days();
    if days.len() > MAX_DATES {
        return Err(FetchError::TooManyDates {
            count: days.len(),
            max: MAX_DATES,
        });
    }

    let is_forecast = days.iter().any(|&d| d > today);
    let nomads_start = today - Days::new(NOMADS_RETENTION_DAYS);
    let within_retention = days.iter().all(|&d| d > nomads_start);

    if !(within_retention || is_forecast) {
        return Ok(GfsPlan {
            files: archive_files(&days),
            archive: true,
        });
    }

    if subregion.left < 0 || subregion.right < 0 {
        return Err(FetchError::NegativeLongitude {
            left: subregion.left,
            right: subregion.right,
        });
    }

    let mut files = Vec::new();
    if is_forecast {
        // Analyses up to the day before today, forecast steps after.
        let cutoff = today - Duration::days(1);
        let (past, forecast): (Vec<_>, Vec<_>) = days.into_iter().partition(|&d| d < cutoff);
        analysis_files(&past, subregion, &mut files);
        forecast_files(&forecast, subregion, &mut files);
    } else {
        analysis_files(&days, subregion, &mut files);
    }

    Ok(GfsPlan {
        files,
        archive: false,
    })
}

fn nomads_url(day: NaiveDate, cycle: u32, step: u32, sub: Subregion) -> String {
    format!(
        "{NOMADS_FILTER_URL}?dir=%2Fgfs.{day}%2F{cycle:02}%2Fatmos\
         &file=gfs.t{cycle:02}z.pgrb2.1p00.f{step:03}&all_var=on&all_lev=on\
         &subregion=&toplat={top}&leftlon={left}&rightlon={right}&bottomlat={bottom}",
        day = day.format("%Y%m%d"),
        top = sub.top,
        left = sub.left,
        right = sub.right,
        bottom = sub.bottom,
    )
}

fn nomads_filename(day: NaiveDate, hour: u32, sub: Subregion) -> String {
    format!(
        "GFS_{}_{:02}_{}_{}_{}_{}.grib2",
        day.format("%Y%m%d"),
        hour,
        sub.top,
        sub.bottom,
        sub.left,
        sub.right
    )
}

fn analysis_files(days: &[NaiveDate], sub: Subregion, out: &mut Vec<PlannedFile>) {
    for &day in days {
        for cycle in CYCLES {
            out.push(PlannedFile {
                url: nomads_url(day, cycle, 0, sub),
                filename: nomads_filename(day, cycle, sub),
            });
        }
    }
}

fn forecast_files(days: &[NaiveDate], sub: Subregion, out: &mut Vec<PlannedFile>) {
    let Some(&base_day) = days.first() else {
        return;
    };
    // All steps come from the 00 cycle of the first forecast day.
    let n_hours = days.len() as u32 * 24;
    for step in (0..n_hours).step_by(6) {
        let valid = base_day
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            + Duration::hours(step as i64);
        out.push(PlannedFile {
            url: nomads_url(base_day, 0, step, sub),
            filename: nomads_filename(valid.date(), valid.time().hour(), sub),
        });
    }
}

fn archive_files(days: &[NaiveDate]) -> Vec<PlannedFile> {
    let mut out = Vec::with_capacity(days.len() * CYCLES.len());
    for &day in days {
        for cycle in CYCLES {
            out.push(PlannedFile {
                url: format!(
                    "{RDA_ARCHIVE_URL}{}/{}/fnl_{}_{:02}_00.grib2",
                    day.format("%Y"),
                    day.format("%Y.%m"),
                    day.format("%Y%m%d"),
                    cycle
                ),
                filename: format!("GFS_{}_{:02}.grib2", day.format("%Y%m%d"), cycle),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn recent_past_uses_nomads_analyses() {
        let today = d(2024, 6, 10);
        let range = DateRange::new(d(2024, 6, 5), d(2024, 6, 6)).unwrap();
        let plan = plan_gfs(&range, Subregion::default(), GridResolution::OneDeg, today).unwrap();

        assert!(!plan.uses_archive());
        assert_eq!(plan.files().len(), 8);
        assert!(plan.files()[0].url.contains("filter_gfs_1p00.pl"));
        assert!(plan.files()[0].url.contains("f000"));
        assert_eq!(plan.files()[0].filename, "GFS_20240605_00_70_10_0_360.grib2");
    }

    #[test]
    fn old_dates_fall_back_to_archive() {
        let today = d(2024, 6, 10);
        let range = DateRange::new(d(2023, 3, 13), d(2023, 3, 14)).unwrap();
        let plan = plan_gfs(&range, Subregion::default(), GridResolution::OneDeg, today).unwrap();

        assert!(plan.uses_archive());
        assert_eq!(plan.files().len(), 8);
        assert_eq!(
            plan.files()[0].url,
            "https://data.rda.ucar.edu/d083002/grib2/2023/2023.03/fnl_20230313_00_00.grib2"
        );
        assert_eq!(plan.files()[0].filename, "GFS_20230313_00.grib2");
    }

    #[test]
    fn forecast_days_use_six_hourly_steps_from_cycle_00() {
        let today = d(2024, 6, 10);
        let range = DateRange::new(d(2024, 6, 10), d(2024, 6, 11)).unwrap();
        let plan = plan_gfs(&range, Subregion::default(), GridResolution::OneDeg, today).unwrap();

        // 2 forecast days -> steps 0..48 by 6 -> 8 files, no past analyses
        // (the cutoff is the day before today).
        assert_eq!(plan.files().len(), 8);
        assert!(plan.files().iter().all(|f| f.url.contains("t00z")));
        assert!(plan.files()[1].url.contains("f006"));
        assert_eq!(plan.files()[1].filename, "GFS_20240610_06_70_10_0_360.grib2");
        // Step 30 hours lands on the next calendar day.
        assert!(plan.files()[5].url.contains("f030"));
        assert_eq!(plan.files()[5].filename, "GFS_20240611_06_70_10_0_360.grib2");
    }

    #[test]
    fn non_1p00_grid_is_unsupported() {
        let range = DateRange::new(d(2024, 6, 5), d(2024, 6, 5)).unwrap();
        assert!(matches!(
            plan_gfs(
                &range,
                Subregion::default(),
                GridResolution::QuarterDeg,
                d(2024, 6, 10)
            ),
            Err(FetchError::UnsupportedGrid { .. })
        ));
    }

    #[test]
    fn more_than_20_days_is_rejected() {
        let range = DateRange::new(d(2024, 5, 1), d(2024, 5, 25)).unwrap();
        assert!(matches!(
            plan_gfs(
                &range,
                Subregion::default(),
                GridResolution::OneDeg,
                d(2024, 6, 10)
            ),
            Err(FetchError::TooManyDates { count: 25, max: 20 })
        ));
    }

    #[test]
    fn negative_longitudes_are_rejected_on_the_nomads_path() {
        let range = DateRange::new(d(2024, 6, 5), d(2024, 6, 5)).unwrap();
        let sub = Subregion {
            bottom: 10,
            top: 70,
            left: -30,
            right: 40,
        };
        assert!(matches!(
            plan_gfs(&range, sub, GridResolution::OneDeg, d(2024, 6, 10)),
            Err(FetchError::NegativeLongitude { .. })
        ));
    }
}
