//! The per-domain grid value object.

/// An evenly spaced lat/lon grid for one nesting level.
///
/// Built once by [`compute_grid`](crate::compute_grid) and never mutated;
/// later nesting levels read their parent's coordinates from the already
/// computed grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    lons: Vec<f64>,
    lats: Vec<f64>,
    center_lat: f64,
    center_lon: f64,
    dx: f64,
    dy: f64,
}

impl Grid {
    pub(crate) fn new(
        lons: Vec<f64>,
        lats: Vec<f64>,
        center_lat: f64,
        center_lon: f64,
        dx: f64,
        dy: f64,
    ) -> Self {
        Self {
            lons,
            lats,
            center_lat,
            center_lon,
            dx,
            dy,
        }
    }

    /// West-east longitudes, length `e_we`.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// South-north latitudes, length `e_sn`.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Latitude of the grid center.
    pub fn center_lat(&self) -> f64 {
        self.center_lat
    }

    /// Longitude of the grid center.
    pub fn center_lon(&self) -> f64 {
        self.center_lon
    }

    /// Effective west-east spacing in meters.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Effective south-north spacing in meters.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Bounding box as `(lon_min, lon_max, lat_min, lat_max)`.
    ///
    /// Coordinate arrays are monotonically increasing, so the extremes
    /// sit at the ends.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        (
            *self.lons.first().unwrap_or(&f64::NAN),
            *self.lons.last().unwrap_or(&f64::NAN),
            *self.lats.first().unwrap_or(&f64::NAN),
            *self.lats.last().unwrap_or(&f64::NAN),
        )
    }
}
