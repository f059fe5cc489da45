//! C `printf`-style scientific notation.
//!
//! Rust's `{:e}` writes `1.5e2`; the fixtures use the C layout `1.5e+02`,
//! with an explicit exponent sign and at least two exponent digits.

use std::fmt;

/// Fractional digits used for every fixture column (`%.18e`).
pub const FIXTURE_PRECISION: usize = 18;

/// Fractional digits of C's default `%e`.
pub const DEFAULT_PRECISION: usize = 6;

/// Display adapter rendering an `f64` as C `%.<precision>e`.
#[derive(Debug, Clone, Copy)]
pub struct Scientific {
    pub value: f64,
    pub precision: usize,
}

impl Scientific {
    pub fn new(value: f64, precision: usize) -> Self {
        Self { value, precision }
    }

    /// `%.18e`
    pub fn fixture(value: f64) -> Self {
        Self::new(value, FIXTURE_PRECISION)
    }

    /// `%e`
    pub fn short(value: f64) -> Self {
        Self::new(value, DEFAULT_PRECISION)
    }
}

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.value.is_finite() {
            return match (self.value.is_nan(), self.value.is_sign_negative()) {
                (true, _) => f.write_str("nan"),
                (false, true) => f.write_str("-inf"),
                (false, false) => f.write_str("inf"),
            };
        }

        let rendered = format!("{:.*e}", self.precision, self.value);
        // Rust always emits an `e` for finite values in LowerExp.
        let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        write!(f, "{mantissa}e{sign}{digits:0>2}")
    }
}
