//! OBS_DOMAIN observation files for WRF observation nudging.
//!
//! Station reports come in as [`RawObservation`]s, get joined with
//! [`StationInfo`] metadata and derived into [`ObservationRecord`]s
//! (unit scaling, wind decomposition, sea-level pressure fallback,
//! ASCII station names), and are finally serialized by
//! [`write_obs_domain`] into the fixed-width text format the nudging
//! reader consumes: four header lines plus one data line of value/QC
//! pairs per record, file name `"{prefix}{domain}01"`.
//!
//! Only the single-level surface record shape is implemented; asking
//! for the sounding shape fails fast instead of emitting a file the
//! model would misread.

pub mod error;
pub mod record;
pub mod translit;
pub mod writer;

pub use error::LittlerError;
pub use record::{
    MISSING, FM_CODE_SURFACE, ObservationRecord, RawObservation, StationInfo, build_records,
};
pub use translit::transliterate;
pub use writer::{RecordShape, write_obs_domain};
