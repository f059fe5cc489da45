// ---------------------------------------------------------------------------
// WavelengthGrid – the sampling axis shared by every filter
// ---------------------------------------------------------------------------

/// Wavelength sampling in angstroms.
///
/// Samples are produced by repeatedly adding `step` to a running value that
/// starts at `min`, while the running value is below `max + 1.0`. The last
/// sample may therefore sit at or just past `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthGrid {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for WavelengthGrid {
    fn default() -> Self {
        Self {
            min: 100.0,
            max: 30000.0,
            step: 10.0,
        }
    }
}

impl WavelengthGrid {
    /// Iterate the samples in ascending order.
    pub fn samples(&self) -> GridSamples {
        GridSamples {
            next: self.min,
            limit: self.max + 1.0,
            step: self.step,
        }
    }

    /// Number of samples the iterator yields.
    pub fn len(&self) -> usize {
        self.samples().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulating iterator over a [`WavelengthGrid`].
///
/// Each value is the previous one plus `step`, never `min + k * step`, so the
/// rounding drift of the running sum is part of the output.
#[derive(Debug, Clone)]
pub struct GridSamples {
    next: f64,
    limit: f64,
    step: f64,
}

impl Iterator for GridSamples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next < self.limit {
            let current = self.next;
            self.next += self.step;
            Some(current)
        } else {
            None
        }
    }
}
