//! Trajectory log output.
//!
//! The trajectory log is a CSV file with a fixed six-column header: the
//! truth coordinates followed by the two derived paths the run mode
//! produced. One data row per path index, values rendered as decimal
//! floating point. An empty run still writes the header row.

use std::path::Path;

use serde::Serialize;

use crate::Coordinate;
use crate::error::NavError;

/// Header of the coupling-mode log.
const COUPLING_HEADER: [&str; 6] = [
    "true_latitude",
    "true_longitude",
    "loosely_latitude",
    "loosely_longitude",
    "tightly_latitude",
    "tightly_longitude",
];

/// Header of the fusion-mode log.
const FUSION_HEADER: [&str; 6] = [
    "true_latitude",
    "true_longitude",
    "gnss_latitude",
    "gnss_longitude",
    "ins_latitude",
    "ins_longitude",
];

/// One data row: truth plus two derived paths, index-aligned.
#[derive(Debug, Serialize)]
struct LogRow(f64, f64, f64, f64, f64, f64);

fn write_log<P: AsRef<Path>>(
    path: P,
    header: &[&str; 6],
    truth: &[Coordinate],
    first: &[Coordinate],
    second: &[Coordinate],
) -> Result<(), NavError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;
    for ((t, a), b) in truth.iter().zip(first.iter()).zip(second.iter()) {
        writer.serialize(LogRow(
            t.latitude,
            t.longitude,
            a.latitude,
            a.longitude,
            b.latitude,
            b.longitude,
        ))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the coupling-mode log: truth alongside the loosely and tightly
/// coupled variants.
///
/// # Errors
/// [`NavError::SinkUnavailable`] if the destination cannot be opened or
/// written; the in-memory paths are discarded, not retried.
pub fn write_coupling_log<P: AsRef<Path>>(
    path: P,
    truth: &[Coordinate],
    loosely: &[Coordinate],
    tightly: &[Coordinate],
) -> Result<(), NavError> {
    write_log(path, &COUPLING_HEADER, truth, loosely, tightly)
}

/// Writes the fusion-mode log: truth alongside the GNSS and INS estimates.
///
/// # Errors
/// [`NavError::SinkUnavailable`] if the destination cannot be opened or
/// written.
pub fn write_fusion_log<P: AsRef<Path>>(
    path: P,
    truth: &[Coordinate],
    gnss: &[Coordinate],
    ins: &[Coordinate],
) -> Result<(), NavError> {
    write_log(path, &FUSION_HEADER, truth, gnss, ins)
}
