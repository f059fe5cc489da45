//! Synthetic photometry fixtures: Gaussian bandpass curves and their
//! photon-weighted probability densities for the `u g r i z` filters.

pub mod config;
pub mod fixture;
pub mod format;
pub mod loader;
pub mod photometry;
pub mod verify;
