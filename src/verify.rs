//! Consistency checks for a written bandpass/phi pair.
//!
//! The photometry tests that consume these fixtures load the bandpass file,
//! rebuild phi from it, and compare to the phi file to seven decimal places.
//! [`verify_pair`] performs the same comparison plus the structural checks
//! on both files.

use thiserror::Error;

use crate::loader::FixtureSample;
use crate::photometry::filter::Filter;
use crate::photometry::grid::WavelengthGrid;

/// Tolerance on the spacing between consecutive wavelengths.
const STEP_TOLERANCE: f64 = 1e-9;

/// Relative tolerance when comparing a bandpass row to the Gaussian model.
const SENSITIVITY_TOLERANCE: f64 = 1e-12;

/// Relative tolerance on `phi · λ · norm ≈ S(λ)`.
const PHI_TOLERANCE: f64 = 1e-9;

/// Absolute tolerance of the downstream phi comparison (7 decimal places).
const REBUILT_PHI_TOLERANCE: f64 = 0.5e-7;

/// Ways a fixture pair can disagree with its filter model.
#[derive(Debug, Error, PartialEq)]
pub enum VerifyError {
    #[error("filter {filter}: bandpass has {bandpass} rows but phi has {phi}")]
    RowCountMismatch {
        filter: String,
        bandpass: usize,
        phi: usize,
    },

    #[error("filter {filter}: no rows")]
    Empty { filter: String },

    #[error("filter {filter}: row {row} wavelength {found} does not match {expected}")]
    WavelengthMismatch {
        filter: String,
        row: usize,
        expected: f64,
        found: f64,
    },

    #[error("filter {filter}: row {row} wavelength step {found} differs from {expected}")]
    IrregularStep {
        filter: String,
        row: usize,
        expected: f64,
        found: f64,
    },

    #[error("filter {filter}: row {row} sensitivity {found} differs from model {expected}")]
    Sensitivity {
        filter: String,
        row: usize,
        expected: f64,
        found: f64,
    },

    #[error("filter {filter}: row {row} phi·λ·norm = {found}, expected {expected}")]
    Phi {
        filter: String,
        row: usize,
        expected: f64,
        found: f64,
    },

    #[error("filter {filter}: row {row} phi rebuilt from bandpass is {expected}, file has {found}")]
    RebuiltPhi {
        filter: String,
        row: usize,
        expected: f64,
        found: f64,
    },
}

fn relative_close(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= tolerance * scale
}

/// Check a loaded bandpass/phi pair for `filter` against each other and the model.
///
/// `norm` is the value the generator reported for this filter.
pub fn verify_pair(
    filter: &Filter,
    grid: &WavelengthGrid,
    norm: f64,
    bandpass: &[FixtureSample],
    phi: &[FixtureSample],
) -> Result<(), VerifyError> {
    let name = || filter.name.clone();

    if bandpass.len() != phi.len() {
        return Err(VerifyError::RowCountMismatch {
            filter: name(),
            bandpass: bandpass.len(),
            phi: phi.len(),
        });
    }
    if bandpass.is_empty() {
        return Err(VerifyError::Empty { filter: name() });
    }

    for (row, pair) in bandpass.windows(2).enumerate() {
        let step = pair[1].wavelength - pair[0].wavelength;
        if (step - grid.step).abs() > STEP_TOLERANCE {
            return Err(VerifyError::IrregularStep {
                filter: name(),
                row: row + 1,
                expected: grid.step,
                found: step,
            });
        }
    }

    for (row, (b, p)) in bandpass.iter().zip(phi).enumerate() {
        if b.wavelength != p.wavelength {
            return Err(VerifyError::WavelengthMismatch {
                filter: name(),
                row,
                expected: b.wavelength,
                found: p.wavelength,
            });
        }

        let model = filter.sensitivity(b.wavelength);
        if !relative_close(b.value, model, SENSITIVITY_TOLERANCE) {
            return Err(VerifyError::Sensitivity {
                filter: name(),
                row,
                expected: model,
                found: b.value,
            });
        }

        let recovered = p.value * p.wavelength * norm;
        if !relative_close(recovered, model, PHI_TOLERANCE) {
            return Err(VerifyError::Phi {
                filter: name(),
                row,
                expected: model,
                found: recovered,
            });
        }
    }

    let rebuilt = rebuild_phi(bandpass, grid.step);
    for (row, (expected, p)) in rebuilt.iter().zip(phi).enumerate() {
        if (expected - p.value).abs() > REBUILT_PHI_TOLERANCE {
            return Err(VerifyError::RebuiltPhi {
                filter: name(),
                row,
                expected: *expected,
                found: p.value,
            });
        }
    }

    Ok(())
}

/// Phi computed from bandpass rows alone: `S / (λ · Σ step · S / λ)`.
pub fn rebuild_phi(bandpass: &[FixtureSample], step: f64) -> Vec<f64> {
    let norm: f64 = bandpass
        .iter()
        .map(|s| step * s.value / s.wavelength)
        .sum();
    bandpass
        .iter()
        .map(|s| s.value / (s.wavelength * norm))
        .collect()
}
