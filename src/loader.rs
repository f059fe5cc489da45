use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Fixture reader
// ---------------------------------------------------------------------------

/// One row of a `.dat` fixture.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FixtureSample {
    /// Wavelength (angstroms).
    pub wavelength: f64,
    /// Sensitivity for bandpass files, probability density for phi files.
    pub value: f64,
}

/// Load a two-column, space-separated fixture file.
///
/// Layout: no header, one `<wavelength> <value>` pair per line, as written by
/// the generator.
pub fn load_fixture(path: &Path) -> Result<Vec<FixtureSample>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening fixture {}", path.display()))?;

    let mut samples = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("{}: row {row_no}", path.display()))?;
        if record.len() != 2 {
            bail!(
                "{}: row {row_no} has {} columns, expected 2",
                path.display(),
                record.len()
            );
        }
        let sample: FixtureSample = record
            .deserialize(None)
            .with_context(|| format!("{}: row {row_no} is not a number pair", path.display()))?;
        samples.push(sample);
    }

    Ok(samples)
}
