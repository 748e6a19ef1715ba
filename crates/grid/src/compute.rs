//! Nested-domain grid construction.

use boreas_namelist::Namelist;

use crate::error::GridError;
use crate::geo::{meter_to_lat, meter_to_lon};
use crate::grid::Grid;

/// Number of alternative dimension values suggested on a nesting violation.
const N_SUGGESTIONS: usize = 5;

/// Computes one [`Grid`] per nesting level from a parsed namelist.
///
/// Levels are computed in increasing order; a child level locates its
/// parent via `parent_id` and reads the parent's coordinates at
/// `i_parent_start`/`j_parent_start`, so the returned vector is ordered
/// parent-first.
///
/// # Errors
///
/// Returns [`GridError::NestingRatio`] when `(e_we - 1)` or `(e_sn - 1)`
/// is not divisible by `parent_grid_ratio` (the error carries suggested
/// valid values), [`GridError::InvalidParentId`] /
/// [`GridError::ParentStartOutOfRange`] for inconsistent nesting
/// references, and [`GridError::Namelist`] for missing or non-numeric
/// configuration keys.
pub fn compute_grid(domain: &Namelist) -> Result<Vec<Grid>, GridError> {
    let max_dom = domain.usize_first("max_dom")?;
    let dx0 = domain.f64_first("dx")?;
    let dy0 = domain.f64_first("dy")?;

    let mut grids: Vec<Grid> = Vec::with_capacity(max_dom);

    for i in 0..max_dom {
        let ratio = domain.usize_at("parent_grid_ratio", i)?;
        if ratio < 1 {
            return Err(GridError::InvalidRatio {
                domain: i + 1,
                ratio,
            });
        }

        // Effective spacing. The extra (i + 2) divisor beyond the second
        // level reproduces the reference implementation; the standard WPS
        // convention would chain ratios multiplicatively instead. Kept
        // as-is until confirmed against the upstream model.
        let (dx, dy) = if i <= 1 {
            (dx0 / ratio as f64, dy0 / ratio as f64)
        } else {
            let divisor = (ratio * (i + 1)) as f64;
            (dx0 / divisor, dy0 / divisor)
        };

        let e_we = domain.usize_at("e_we", i)?;
        let e_sn = domain.usize_at("e_sn", i)?;
        check_nesting(i + 1, "e_we", e_we, ratio)?;
        check_nesting(i + 1, "e_sn", e_sn, ratio)?;

        let (center_lat, center_lon) = if i == 0 {
            (domain.f64_first("ref_lat")?, domain.f64_first("ref_lon")?)
        } else {
            let parent_id = domain.usize_at("parent_id", i)?;
            let parent = parent_id
                .checked_sub(1)
                .and_then(|idx| grids.get(idx))
                .ok_or(GridError::InvalidParentId {
                    domain: i + 1,
                    parent_id,
                })?;

            let i_start = domain.usize_at("i_parent_start", i)?;
            let j_start = domain.usize_at("j_parent_start", i)?;

            let start_lat =
                *parent
                    .lats()
                    .get(j_start)
                    .ok_or(GridError::ParentStartOutOfRange {
                        domain: i + 1,
                        axis: "j",
                        index: j_start,
                        parent: parent_id,
                        len: parent.lats().len(),
                    })?;
            let start_lon =
                *parent
                    .lons()
                    .get(i_start)
                    .ok_or(GridError::ParentStartOutOfRange {
                        domain: i + 1,
                        axis: "i",
                        index: i_start,
                        parent: parent_id,
                        len: parent.lons().len(),
                    })?;

            let width = meter_to_lon((e_we - 1) as f64 * dx, start_lat);
            let height = meter_to_lat((e_sn - 1) as f64 * dy);
            (start_lat + height / 2.0, start_lon + width / 2.0)
        };

        let spacing_lon = meter_to_lon(dx, center_lat);
        let spacing_lat = meter_to_lat(dy);

        let half_we = e_we as f64 / 2.0;
        let half_sn = e_sn as f64 / 2.0;
        let lons: Vec<f64> = (0..e_we)
            .map(|k| center_lon + (k as f64 - half_we) * spacing_lon)
            .collect();
        let lats: Vec<f64> = (0..e_sn)
            .map(|k| center_lat + (k as f64 - half_sn) * spacing_lat)
            .collect();

        grids.push(Grid::new(lons, lats, center_lat, center_lon, dx, dy));
    }

    Ok(grids)
}

/// Nominal per-domain grid spacing in kilometers.
///
/// Chains the parent ratios multiplicatively starting from the level-0
/// `dx`, which is the figure WPS documentation quotes for each domain.
/// Note that [`Grid::dx`]/[`Grid::dy`] on the third and deeper domains
/// follow a different, inherited divisor (see [`compute_grid`]) and so
/// diverge from the values reported here.
///
/// # Errors
///
/// Returns [`GridError::Namelist`] for missing or non-numeric keys and
/// [`GridError::InvalidRatio`] for a zero ratio.
pub fn nominal_spacings_km(domain: &Namelist) -> Result<Vec<f64>, GridError> {
    let max_dom = domain.usize_first("max_dom")?;
    let mut dx_km = domain.f64_first("dx")? / 1000.0;

    let mut spacings = Vec::with_capacity(max_dom);
    for i in 0..max_dom {
        let ratio = domain.usize_at("parent_grid_ratio", i)?;
        if ratio < 1 {
            return Err(GridError::InvalidRatio {
                domain: i + 1,
                ratio,
            });
        }
        dx_km /= ratio as f64;
        spacings.push(dx_km);
    }
    Ok(spacings)
}

fn check_nesting(
    domain: usize,
    dimension: &'static str,
    value: usize,
    ratio: usize,
) -> Result<(), GridError> {
    // A zero dimension can never satisfy the criterion; report it with
    // the smallest valid values instead of underflowing below.
    let Some(offset) = value.checked_sub(1) else {
        return Err(GridError::NestingRatio {
            domain,
            dimension,
            value,
            ratio,
            suggested: (0..N_SUGGESTIONS).map(|n| n * ratio + 1).collect(),
        });
    };
    if offset % ratio == 0 {
        return Ok(());
    }
    let min_n = offset / ratio;
    let suggested: Vec<usize> = (min_n..min_n + N_SUGGESTIONS)
        .map(|n| n * ratio + 1)
        .collect();
    Err(GridError::NestingRatio {
        domain,
        dimension,
        value,
        ratio,
        suggested,
    })
}
