/// Photometry layer: wavelength grid, filter models, and the two curve passes.
///
/// Architecture:
/// ```text
///   WavelengthGrid        Filter { name, mu, sigma }
///        │                        │
///        └──────────┬─────────────┘
///                   ▼
///   ┌──────────────────────────┐
///   │  curve::write_bandpass    │  sensitivity rows, accumulates norm
///   └──────────────────────────┘
///                   │ norm
///                   ▼
///   ┌──────────────────────────┐
///   │  curve::write_phi         │  sensitivity / (λ · norm) rows
///   └──────────────────────────┘
/// ```

pub mod curve;
pub mod filter;
pub mod grid;
