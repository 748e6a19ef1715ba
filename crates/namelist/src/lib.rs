//! WPS namelist parsing for the boreas toolkit.
//!
//! A `namelist.wps` file is a line-oriented `key = value[, value...]`
//! format with `!` comments, `&section` headers and `/` terminators.
//! This crate parses it into a flat [`Namelist`] mapping and provides
//! typed positional accessors, where position corresponds to the domain
//! nesting level:
//!
//! ```
//! use boreas_namelist::Namelist;
//!
//! let nl = Namelist::from_str("&geogrid\n max_dom = 2,\n e_we = 91, 121,\n/\n");
//! assert_eq!(nl.usize_first("max_dom").unwrap(), 2);
//! assert_eq!(nl.usize_at("e_we", 1).unwrap(), 121);
//! ```
//!
//! Configuration is operator-authored: lookup and parse failures carry
//! the key, index and raw value so mistakes surface immediately at the
//! reading site.

pub mod error;
pub mod namelist;

pub use error::NamelistError;
pub use namelist::Namelist;
