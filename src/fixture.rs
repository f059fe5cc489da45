use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::FixtureConfig;
use crate::format::Scientific;
use crate::loader::load_fixture;
use crate::photometry::curve::{PassSummary, write_bandpass, write_phi};
use crate::photometry::filter::{Filter, standard_filters};
use crate::verify::verify_pair;

// ---------------------------------------------------------------------------
// File naming
// ---------------------------------------------------------------------------

/// `test_bandpass_<name>.dat`
pub fn bandpass_file_name(filter_name: &str) -> String {
    format!("test_bandpass_{filter_name}.dat")
}

/// `test_phi_<name>.dat`
pub fn phi_file_name(filter_name: &str) -> String {
    format!("test_phi_{filter_name}.dat")
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// What was written for one filter.
#[derive(Debug, Clone)]
pub struct FilterReport {
    pub filter: Filter,
    pub norm: f64,
    pub rows: usize,
    pub bandpass_path: PathBuf,
    pub phi_path: PathBuf,
}

/// Write the bandpass and phi fixtures for every filter, in `u g r i z` order.
///
/// After each bandpass file is closed, `norm <%e>` is written to `report`.
/// Both files of a filter are closed before the next filter starts.
pub fn generate<R: Write>(config: &FixtureConfig, report: &mut R) -> Result<Vec<FilterReport>> {
    let grid = &config.grid;
    let mut reports = Vec::new();

    for filter in standard_filters(grid) {
        let bandpass_path = config.output_dir.join(bandpass_file_name(&filter.name));
        let phi_path = config.output_dir.join(phi_file_name(&filter.name));

        let bandpass = write_pass(&bandpass_path, |out| write_bandpass(&filter, grid, out))?;
        let norm = bandpass.norm;

        writeln!(report, "norm {}", Scientific::short(norm)).context("writing norm report")?;
        info!(
            "filter {}: norm {} over {} rows -> {}",
            filter.name,
            Scientific::short(norm),
            bandpass.rows,
            bandpass_path.display()
        );

        let phi = write_pass(&phi_path, |out| write_phi(&filter, grid, norm, out))?;
        info!("filter {}: phi -> {}", filter.name, phi_path.display());

        reports.push(FilterReport {
            filter,
            norm,
            rows: phi.rows,
            bandpass_path,
            phi_path,
        });
    }

    Ok(reports)
}

/// Create `path`, stream one pass into it, and flush before the handle drops.
fn write_pass<F>(path: &Path, pass: F) -> Result<PassSummary>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<PassSummary>,
{
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let summary = pass(&mut out).with_context(|| format!("writing {}", path.display()))?;
    out.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(summary)
}

/// Read every written pair back and check it against its filter model.
pub fn verify_written(config: &FixtureConfig, reports: &[FilterReport]) -> Result<()> {
    for report in reports {
        let bandpass = load_fixture(&report.bandpass_path)?;
        let phi = load_fixture(&report.phi_path)?;
        verify_pair(&report.filter, &config.grid, report.norm, &bandpass, &phi)
            .with_context(|| format!("verifying filter {}", report.filter.name))?;
        debug!(
            "filter {}: {} rows verified",
            report.filter.name,
            bandpass.len()
        );
    }
    Ok(())
}
