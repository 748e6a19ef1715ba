//! Error types for the boreas-littler crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the boreas-littler crate.
#[derive(Debug, thiserror::Error)]
pub enum LittlerError {
    /// Returned when a sounding-shaped (multi-level) record set is
    /// requested. Only the single-level surface shape is implemented;
    /// failing up front avoids emitting a partially correct file.
    #[error("sounding records are not implemented; only surface observations are supported")]
    SoundingUnsupported,

    /// Returned when the output file cannot be created or written.
    #[error("cannot write {}: {reason}", path.display())]
    Io {
        /// Path of the output file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a raw observation is missing station metadata.
    #[error("station '{station}' not present in metadata")]
    UnknownStation {
        /// The station identifier that could not be resolved.
        station: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_sounding_unsupported() {
        assert_eq!(
            LittlerError::SoundingUnsupported.to_string(),
            "sounding records are not implemented; only surface observations are supported"
        );
    }

    #[test]
    fn display_io() {
        let e = LittlerError::Io {
            path: PathBuf::from("/tmp/OBS_DOMAIN101"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "cannot write /tmp/OBS_DOMAIN101: permission denied"
        );
    }

    #[test]
    fn display_unknown_station() {
        let e = LittlerError::UnknownStation {
            station: "11290".to_string(),
        };
        assert_eq!(e.to_string(), "station '11290' not present in metadata");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<LittlerError>();
    }
}
