//! Fixed-width OBS_DOMAIN file writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::info;

use crate::error::LittlerError;
use crate::record::{MISSING, ObservationRecord, FM_CODE_SURFACE};

/// Shape of the records in an OBS_DOMAIN file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// Single-level surface observations, one measurement per record.
    Surface,
    /// Multi-level vertical profiles. Not implemented.
    Sounding,
}

/// Quality-control flag written next to every data value.
const QC_FLAG: f64 = 0.0;

/// Writes observation records as an OBS_DOMAIN file for the given domain.
///
/// The output file is `"{path_prefix}{domain_number}01"`. Records are
/// defensively re-sorted ascending by timestamp; each record becomes
/// four header lines and one data line of value/QC pairs, every value
/// right-justified into an 11-character field with 3 decimals.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`LittlerError::SoundingUnsupported`] for
/// [`RecordShape::Sounding`] before any file is created, and
/// [`LittlerError::Io`] when the file cannot be written.
pub fn write_obs_domain(
    records: &[ObservationRecord],
    domain_number: u32,
    path_prefix: &str,
    shape: RecordShape,
) -> Result<PathBuf, LittlerError> {
    // Surface records carry exactly one measurement; a sounding would
    // carry one per vertical level and needs a different record layout.
    let meas_count = match shape {
        RecordShape::Surface => 1,
        RecordShape::Sounding => return Err(LittlerError::SoundingUnsupported),
    };

    let path = PathBuf::from(format!("{path_prefix}{domain_number}01"));
    let io_err = |e: std::io::Error| LittlerError::Io {
        path: path.clone(),
        reason: e.to_string(),
    };

    let mut ordered: Vec<&ObservationRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.time);

    let file = File::create(&path).map_err(io_err)?;
    let mut w = BufWriter::new(file);

    for record in &ordered {
        write_record(&mut w, record, meas_count).map_err(io_err)?;
    }
    w.flush().map_err(io_err)?;

    info!(
        path = %path.display(),
        n_records = ordered.len(),
        "OBS_DOMAIN file written"
    );
    Ok(path)
}

fn write_record(
    w: &mut impl Write,
    record: &ObservationRecord,
    meas_count: i32,
) -> std::io::Result<()> {
    let sound_flag = "F";
    let bogus_flag = if record.bogus { "T" } else { "F" };

    writeln!(w, " {:<14}", record.date_string())?;
    writeln!(w, "  {:9.4} {:9.4}", record.latitude, record.longitude)?;
    writeln!(w, "  {:<40}   {:<40}   ", record.id, record.name)?;
    writeln!(
        w,
        "  {:<16}  {:<16}  {:8.0}.  {:>4}  {:>4}  {:5}",
        FM_CODE_SURFACE, record.source, record.elevation, sound_flag, bogus_flag, meas_count
    )?;

    // Value/QC pairs of the surface data line, in reader order. The
    // reference-pressure pair is always the missing sentinel for surface
    // stations.
    let fields = [
        record.slp,
        QC_FLAG,
        MISSING,
        MISSING,
        record.elevation,
        QC_FLAG,
        record.t2m_k,
        QC_FLAG,
        record.u,
        QC_FLAG,
        record.v,
        QC_FLAG,
        record.relative_humidity,
        QC_FLAG,
        record.surface_pressure,
        QC_FLAG,
        record.precipitation,
        QC_FLAG,
    ];
    let line: Vec<String> = fields.iter().map(|v| format!("{v:11.3}")).collect();
    writeln!(w, "{}", line.join(" "))?;

    Ok(())
}
