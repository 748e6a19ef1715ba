//! Error types for the boreas-fetch crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the boreas-fetch crate.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Wraps a transport-level HTTP failure.
    #[error("request to {url} failed: {reason}")]
    Http {
        /// The URL that was requested.
        url: String,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when the server answers with a non-success status code.
    #[error("unexpected status {status} for {url}")]
    Status {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Returned when the downloaded payload cannot be written to disk.
    #[error("cannot write {}: {reason}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a metadata payload cannot be decoded.
    #[error("cannot decode metadata: {reason}")]
    Json {
        /// Description of the decoding failure.
        reason: String,
    },

    /// Returned for grid resolutions the GFS filter endpoint does not
    /// serve through this client.
    #[error("only the 1p00 grid is implemented, got {grid}")]
    UnsupportedGrid {
        /// The requested resolution label.
        grid: String,
    },

    /// Returned when a date range exceeds the request budget.
    #[error("date range spans {count} days, maximum is {max}")]
    TooManyDates {
        /// Number of days requested.
        count: usize,
        /// Largest allowed number of days.
        max: usize,
    },

    /// Returned when a subregion uses negative longitudes. The filter
    /// endpoints expect 0..360 east longitude.
    #[error("longitudes must be non-negative (0..360 east), got left={left} right={right}")]
    NegativeLongitude {
        /// Western bound as given.
        left: i32,
        /// Eastern bound as given.
        right: i32,
    },

    /// Returned when the end of a date range precedes its start.
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// Range start (inclusive).
        start: chrono::NaiveDate,
        /// Range end (inclusive).
        end: chrono::NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_status() {
        let e = FetchError::Status {
            url: "https://example.org/x".to_string(),
            status: 404,
        };
        assert_eq!(e.to_string(), "unexpected status 404 for https://example.org/x");
    }

    #[test]
    fn display_unsupported_grid() {
        let e = FetchError::UnsupportedGrid {
            grid: "0p25".to_string(),
        };
        assert_eq!(e.to_string(), "only the 1p00 grid is implemented, got 0p25");
    }

    #[test]
    fn display_too_many_dates() {
        let e = FetchError::TooManyDates { count: 31, max: 20 };
        assert_eq!(e.to_string(), "date range spans 31 days, maximum is 20");
    }

    #[test]
    fn display_negative_longitude() {
        let e = FetchError::NegativeLongitude {
            left: -10,
            right: 40,
        };
        assert_eq!(
            e.to_string(),
            "longitudes must be non-negative (0..360 east), got left=-10 right=40"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<FetchError>();
    }
}
