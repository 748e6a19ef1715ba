//! Parsing and positional access for WPS-style namelists.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::NamelistError;

/// A parsed namelist: a flat mapping from key to an ordered list of
/// string values, one value per nesting level where applicable.
///
/// Section markers (`&share`, `&geogrid`, ...) and terminators (`/`) are
/// structural only; keys from all sections land in the same flat map,
/// matching how WPS itself treats domain keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namelist {
    entries: BTreeMap<String, Vec<String>>,
}

impl Namelist {
    /// Parses a namelist from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`NamelistError::Io`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, NamelistError> {
        let text = std::fs::read_to_string(path).map_err(|e| NamelistError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_str(&text))
    }

    /// Parses a namelist from in-memory text.
    ///
    /// Comments start at `!` and run to end of line. Blank lines, section
    /// headers (`&...`) and terminators (`/`) are skipped. Everything else
    /// is expected to look like `key = v1, v2, ...`; lines without `=` are
    /// ignored. Values are trimmed of surrounding whitespace and quotes,
    /// and empty entries from trailing commas are dropped.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        let mut entries = BTreeMap::new();

        for raw in text.lines() {
            let line = raw.split('!').next().unwrap_or("").trim();
            if line.is_empty() || line.starts_with('/') || line.starts_with('&') {
                continue;
            }
            let Some((name, rest)) = line.split_once('=') else {
                continue;
            };
            let values: Vec<String> = rest
                .split(',')
                .map(|v| v.trim().trim_matches('\'').trim_matches('"').to_string())
                .filter(|v| !v.is_empty())
                .collect();
            entries.insert(name.trim().to_string(), values);
        }

        Self { entries }
    }

    /// Returns all values for `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Returns `true` if the namelist holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the raw string value for `key` at positional `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NamelistError::MissingKey`] or [`NamelistError::MissingValue`].
    pub fn str_at(&self, key: &str, index: usize) -> Result<&str, NamelistError> {
        let values = self
            .entries
            .get(key)
            .ok_or_else(|| NamelistError::MissingKey {
                key: key.to_string(),
            })?;
        values
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| NamelistError::MissingValue {
                key: key.to_string(),
                index,
                len: values.len(),
            })
    }

    /// Returns the value for `key` at `index` parsed as `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`NamelistError::Parse`] on non-integer values, plus the
    /// lookup errors of [`Namelist::str_at`].
    pub fn usize_at(&self, key: &str, index: usize) -> Result<usize, NamelistError> {
        let raw = self.str_at(key, index)?;
        raw.parse().map_err(|_| NamelistError::Parse {
            key: key.to_string(),
            index,
            value: raw.to_string(),
            expected: "usize",
        })
    }

    /// Returns the value for `key` at `index` parsed as `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`NamelistError::Parse`] on non-numeric values, plus the
    /// lookup errors of [`Namelist::str_at`].
    pub fn f64_at(&self, key: &str, index: usize) -> Result<f64, NamelistError> {
        let raw = self.str_at(key, index)?;
        raw.parse().map_err(|_| NamelistError::Parse {
            key: key.to_string(),
            index,
            value: raw.to_string(),
            expected: "f64",
        })
    }

    /// Convenience: first value of `key` as `usize`.
    ///
    /// # Errors
    ///
    /// Same as [`Namelist::usize_at`] with index 0.
    pub fn usize_first(&self, key: &str) -> Result<usize, NamelistError> {
        self.usize_at(key, 0)
    }

    /// Convenience: first value of `key` as `f64`.
    ///
    /// # Errors
    ///
    /// Same as [`Namelist::f64_at`] with index 0.
    pub fn f64_first(&self, key: &str) -> Result<f64, NamelistError> {
        self.f64_at(key, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_lists() {
        let nl = Namelist::from_str("max_dom = 2,\ne_we = 91, 121,\n");
        assert_eq!(nl.get("max_dom"), Some(&["2".to_string()][..]));
        assert_eq!(
            nl.get("e_we"),
            Some(&["91".to_string(), "121".to_string()][..])
        );
    }

    #[test]
    fn strips_comments_sections_and_quotes() {
        let text = "&share\n wrf_core = 'ARW', ! the core\n max_dom = 1,\n/\n";
        let nl = Namelist::from_str(text);
        assert_eq!(nl.get("wrf_core"), Some(&["ARW".to_string()][..]));
        assert_eq!(nl.usize_first("max_dom").unwrap(), 1);
        assert!(nl.get("&share").is_none());
    }

    #[test]
    fn missing_key_and_value_errors() {
        let nl = Namelist::from_str("e_we = 91,\n");
        assert!(matches!(
            nl.usize_first("max_dom"),
            Err(NamelistError::MissingKey { .. })
        ));
        assert!(matches!(
            nl.usize_at("e_we", 1),
            Err(NamelistError::MissingValue { index: 1, .. })
        ));
    }

    #[test]
    fn parse_error_carries_offending_value() {
        let nl = Namelist::from_str("dx = ten,\n");
        match nl.f64_first("dx") {
            Err(NamelistError::Parse { value, .. }) => assert_eq!(value, "ten"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn ignores_lines_without_equals() {
        let nl = Namelist::from_str("this is junk\nmax_dom = 1,\n");
        assert_eq!(nl.len(), 1);
    }
}
