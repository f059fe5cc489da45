use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;

use photometry_fixtures::config::FixtureConfig;
use photometry_fixtures::fixture::{generate, verify_written};

fn main() -> Result<()> {
    env_logger::init();

    let config = FixtureConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let reports = generate(&config, &mut out)?;
    out.flush().context("flushing stdout")?;

    verify_written(&config, &reports)?;
    info!(
        "wrote {} fixture pairs to {}",
        reports.len(),
        config.output_dir.display()
    );
    Ok(())
}
