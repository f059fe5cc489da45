use std::path::PathBuf;

use crate::photometry::grid::WavelengthGrid;

// ---------------------------------------------------------------------------
// Generator configuration
// ---------------------------------------------------------------------------

/// Where and on what grid the fixtures are generated.
///
/// The binary always runs with [`FixtureConfig::default`]; the fields are
/// public so tests can point the output somewhere disposable.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// Wavelength sampling shared by every filter.
    pub grid: WavelengthGrid,
    /// Directory receiving the `.dat` files.
    pub output_dir: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            grid: WavelengthGrid::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl FixtureConfig {
    /// Default grid, writing into `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
            ..Self::default()
        }
    }
}
