use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::Path;
use tracing::info;

use dashboard_trim::config::{CleanupPlan, DASHBOARD_PATH};
use dashboard_trim::file::cleanup_file;

fn main() -> Result<()> {
    dashboard_trim::init_with_logger(std::io::stderr().is_terminal())
        .context("Failed to initialize dashboard-trim")?;

    let path = Path::new(DASHBOARD_PATH);
    let plan = CleanupPlan::dashboard();
    info!("Using dashboard component: {}", path.display());

    let report = cleanup_file(path, &plan)
        .with_context(|| format!("Failed to clean up {}", path.display()))?;
    info!("Dropped {} lines", report.lines_dropped());

    println!("Done! Removed all hardcoded analytics components");
    Ok(())
}
