use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::CleanupPlan;
use crate::error::{map_io_err, FilterResult};
use crate::file::line_filter::{split_lines, transform_lines, FilterReport};

/// Read a UTF-8 file into lines, each keeping its terminator
pub fn read_lines(path: impl AsRef<Path>) -> FilterResult<Vec<String>> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    let content = fs::read_to_string(path).map_err(map_io_err(path))?;
    Ok(split_lines(&content))
}

/// Replace the file's content with the concatenated lines
pub fn write_lines(path: impl AsRef<Path>, lines: &[String]) -> FilterResult<()> {
    let path = path.as_ref();
    debug!("Writing {} lines to file: {}", lines.len(), path.display());

    fs::write(path, lines.concat()).map_err(map_io_err(path))
}

/// Read, transform and overwrite a file in place.
///
/// Nothing is written unless the read and every edit succeed. There is no
/// backup: the previous content is gone once this returns `Ok`.
pub fn cleanup_file(path: impl AsRef<Path>, plan: &CleanupPlan<'_>) -> FilterResult<FilterReport> {
    let path = path.as_ref();

    let lines = read_lines(path)?;
    let (filtered, report) = transform_lines(lines, plan)?;
    write_lines(path, &filtered)?;

    info!(
        "Cleaned {}: {} sections removed, {} of {} lines kept",
        path.display(),
        report.sections_removed,
        report.lines_written,
        report.lines_read
    );

    Ok(report)
}
