//! Error types for the boreas-grid crate.

use boreas_namelist::NamelistError;

/// Error type for all fallible operations in the boreas-grid crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GridError {
    /// Wraps a lookup or parse failure from the namelist.
    #[error(transparent)]
    Namelist(#[from] NamelistError),

    /// Returned when a domain dimension violates the nesting criterion
    /// `(dim - 1) % parent_grid_ratio == 0`.
    #[error(
        "domain {domain}: {dimension}={value} does not satisfy the nesting criterion \
         for parent_grid_ratio={ratio}; try one of {suggested:?}"
    )]
    NestingRatio {
        /// One-based domain number.
        domain: usize,
        /// Name of the offending dimension (`e_we` or `e_sn`).
        dimension: &'static str,
        /// The violating dimension value.
        value: usize,
        /// The nesting ratio the value must align with.
        ratio: usize,
        /// Up to 5 nearby values that satisfy the criterion.
        suggested: Vec<usize>,
    },

    /// Returned when a child domain's start offset falls outside its
    /// parent grid.
    #[error(
        "domain {domain}: {axis}_parent_start={index} is outside parent domain {parent} \
         ({len} points)"
    )]
    ParentStartOutOfRange {
        /// One-based domain number of the child.
        domain: usize,
        /// Offset axis (`i` or `j`).
        axis: &'static str,
        /// The out-of-range start index.
        index: usize,
        /// One-based domain number of the parent.
        parent: usize,
        /// Number of points the parent grid has along that axis.
        len: usize,
    },

    /// Returned when `parent_grid_ratio` is zero.
    #[error("domain {domain}: parent_grid_ratio must be >= 1, got {ratio}")]
    InvalidRatio {
        /// One-based domain number.
        domain: usize,
        /// The invalid ratio.
        ratio: usize,
    },

    /// Returned when `parent_id` references a domain that has not been
    /// computed yet.
    #[error("domain {domain}: parent_id={parent_id} does not reference an earlier domain")]
    InvalidParentId {
        /// One-based domain number of the child.
        domain: usize,
        /// The invalid parent reference.
        parent_id: usize,
    },
}
