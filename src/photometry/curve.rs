use std::io::{self, Write};

use super::filter::Filter;
use super::grid::WavelengthGrid;
use crate::format::Scientific;

// ---------------------------------------------------------------------------
// Pass 1 – bandpass rows and the photon-weighted norm
// ---------------------------------------------------------------------------

/// Summary of a completed pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassSummary {
    /// Rows written.
    pub rows: usize,
    /// `Σ step · S(λ) / λ` over the grid (only meaningful for the bandpass pass).
    pub norm: f64,
}

/// Write one `"<λ> <S(λ)>"` row per grid sample and accumulate the norm.
pub fn write_bandpass<W: Write>(
    filter: &Filter,
    grid: &WavelengthGrid,
    out: &mut W,
) -> io::Result<PassSummary> {
    let mut norm = 0.0;
    let mut rows = 0;
    for wavelength in grid.samples() {
        let sensitivity = filter.sensitivity(wavelength);
        norm += grid.step * sensitivity / wavelength;
        write_row(out, wavelength, sensitivity)?;
        rows += 1;
    }
    Ok(PassSummary { rows, norm })
}

// ---------------------------------------------------------------------------
// Pass 2 – probability density
// ---------------------------------------------------------------------------

/// Write one `"<λ> <phi(λ)>"` row per grid sample, `phi = S(λ) / (λ · norm)`.
///
/// The sensitivity is evaluated afresh here rather than carried over from
/// [`write_bandpass`].
pub fn write_phi<W: Write>(
    filter: &Filter,
    grid: &WavelengthGrid,
    norm: f64,
    out: &mut W,
) -> io::Result<PassSummary> {
    let mut rows = 0;
    for wavelength in grid.samples() {
        let sensitivity = filter.sensitivity(wavelength);
        let phi = sensitivity / (wavelength * norm);
        write_row(out, wavelength, phi)?;
        rows += 1;
    }
    Ok(PassSummary { rows, norm })
}

fn write_row<W: Write>(out: &mut W, wavelength: f64, value: f64) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        Scientific::fixture(wavelength),
        Scientific::fixture(value)
    )
}
