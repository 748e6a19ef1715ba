//! Error types for the boreas-namelist crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the boreas-namelist crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NamelistError {
    /// Returned when the namelist file cannot be read.
    #[error("cannot read namelist {}: {reason}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a required key is absent from the namelist.
    #[error("key '{key}' not found in namelist")]
    MissingKey {
        /// The missing key.
        key: String,
    },

    /// Returned when a key exists but has no value at the requested
    /// nesting level.
    #[error("key '{key}' has no value at index {index} ({len} value(s) present)")]
    MissingValue {
        /// The key that was looked up.
        key: String,
        /// The requested positional index.
        index: usize,
        /// Number of values the key actually holds.
        len: usize,
    },

    /// Returned when a value cannot be parsed as the requested numeric type.
    #[error("cannot parse '{value}' for key '{key}' at index {index} as {expected}")]
    Parse {
        /// The key that was looked up.
        key: String,
        /// The positional index of the offending value.
        index: usize,
        /// The raw string that failed to parse.
        value: String,
        /// Name of the expected type.
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_key() {
        let e = NamelistError::MissingKey {
            key: "max_dom".to_string(),
        };
        assert_eq!(e.to_string(), "key 'max_dom' not found in namelist");
    }

    #[test]
    fn display_missing_value() {
        let e = NamelistError::MissingValue {
            key: "e_we".to_string(),
            index: 2,
            len: 2,
        };
        assert_eq!(
            e.to_string(),
            "key 'e_we' has no value at index 2 (2 value(s) present)"
        );
    }

    #[test]
    fn display_parse() {
        let e = NamelistError::Parse {
            key: "dx".to_string(),
            index: 0,
            value: "ten".to_string(),
            expected: "f64",
        };
        assert_eq!(
            e.to_string(),
            "cannot parse 'ten' for key 'dx' at index 0 as f64"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<NamelistError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<NamelistError>();
    }
}
