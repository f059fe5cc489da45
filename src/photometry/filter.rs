use super::grid::WavelengthGrid;

// ---------------------------------------------------------------------------
// Filter – one Gaussian passband
// ---------------------------------------------------------------------------

/// A named passband modelled as an unnormalised Gaussian in wavelength.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Single-letter band label, also used in fixture file names.
    pub name: String,
    /// Centre wavelength (angstroms).
    pub mu: f64,
    /// Gaussian width (angstroms).
    pub sigma: f64,
}

impl Filter {
    /// Relative sensitivity at `wavelength`, peaking at 1.0 on `mu`.
    pub fn sensitivity(&self, wavelength: f64) -> f64 {
        gaussian(wavelength, self.mu, self.sigma)
    }
}

/// `exp(-0.5 (x-mu)^2 / sigma^2)`, evaluated left to right so the rounding
/// matches the reference fixtures bit for bit.
fn gaussian(x: f64, mu: f64, sigma: f64) -> f64 {
    (-0.5 * (x - mu) * (x - mu) / (sigma * sigma)).exp()
}

// ---------------------------------------------------------------------------
// The fixed u g r i z set
// ---------------------------------------------------------------------------

/// Band labels, in output order.
pub const FILTER_NAMES: [&str; 5] = ["u", "g", "r", "i", "z"];

/// Centre of `u` in grid steps above `grid.min`.
const FIRST_CENTRE_STEPS: f64 = 200.0;

/// Offset of each later centre from the previous one, in grid steps.
const CENTRE_OFFSET_STEPS: [f64; 4] = [300.0, 700.0, 700.0, 500.0];

/// Widths in grid steps.
const WIDTH_STEPS: [f64; 5] = [100.0, 200.0, 200.0, 150.0, 200.0];

/// Build the five filters for `grid`, in `u g r i z` order.
///
/// Centres are chained: each one is the previous centre plus its offset, so
/// with the default grid they land at 2100, 5100, 12100, 19100 and 24100.
pub fn standard_filters(grid: &WavelengthGrid) -> Vec<Filter> {
    let mut mu = grid.min + FIRST_CENTRE_STEPS * grid.step;
    let mut centres = Vec::with_capacity(FILTER_NAMES.len());
    centres.push(mu);
    for offset in CENTRE_OFFSET_STEPS {
        mu += offset * grid.step;
        centres.push(mu);
    }

    FILTER_NAMES
        .iter()
        .zip(centres)
        .zip(WIDTH_STEPS)
        .map(|((&name, mu), width)| Filter {
            name: name.to_string(),
            mu,
            sigma: width * grid.step,
        })
        .collect()
}
