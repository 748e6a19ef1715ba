//! Nested-domain grid coordinates from a WPS namelist.
//!
//! Given a parsed [`Namelist`](boreas_namelist::Namelist) describing up
//! to `max_dom` nesting levels, [`compute_grid`] derives one [`Grid`]
//! per level: evenly spaced longitude/latitude arrays, the grid center,
//! and the effective spacing. Child domains are anchored at
//! `i_parent_start`/`j_parent_start` inside their parent and must align
//! with the integer nesting ratio; a violation fails with suggested
//! valid dimension values.
//!
//! ```
//! use boreas_grid::compute_grid;
//! use boreas_namelist::Namelist;
//!
//! let nl = Namelist::from_str(
//!     "max_dom = 1,\nparent_grid_ratio = 1,\ne_we = 74,\ne_sn = 61,\n\
//!      dx = 30000,\ndy = 30000,\nref_lat = 47.2,\nref_lon = 14.55,\n",
//! );
//! let grids = compute_grid(&nl).unwrap();
//! assert_eq!(grids[0].lons().len(), 74);
//! assert_eq!(grids[0].center_lat(), 47.2);
//! ```

pub mod compute;
pub mod error;
pub mod geo;
pub mod grid;

pub use compute::{compute_grid, nominal_spacings_km};
pub use error::GridError;
pub use geo::{meter_to_lat, meter_to_lon};
pub use grid::Grid;
