use tracing::{debug, warn};

use crate::config::{CleanupPlan, LineEdit, MarkerPair};
use crate::error::{FilterError, FilterResult};

/// Whether the scan is currently dropping a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipState<'a> {
    Passing,
    Skipping { end_marker: &'a str },
}

/// Summary of one pass over a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub lines_read: usize,
    pub lines_written: usize,
    pub sections_removed: usize,
    /// End marker of a section still open at end of input
    pub unterminated: Option<String>,
}

impl FilterReport {
    pub fn lines_dropped(&self) -> usize {
        self.lines_read - self.lines_written
    }
}

/// Split text into lines, each keeping its own terminator.
///
/// Joining the result gives back the input unchanged.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_owned).collect()
}

/// Apply fixed-position edits in order.
///
/// Every index is checked before any line is touched, so a failed call leaves
/// `lines` as it was.
pub fn apply_line_edits(lines: &mut [String], edits: &[LineEdit<'_>]) -> FilterResult<()> {
    if let Some(edit) = edits.iter().find(|e| e.index() >= lines.len()) {
        return Err(FilterError::line_out_of_range(edit.index(), lines.len()));
    }

    for edit in edits {
        debug!("{}", edit);
        match *edit {
            LineEdit::RemoveSubstring { index, needle } => {
                let line = &mut lines[index];
                if line.contains(needle) {
                    *line = line.replace(needle, "");
                } else {
                    debug!("Line {} has no '{}', left as is", index, needle);
                }
            }
            LineEdit::Blank { index } => lines[index].clear(),
        }
    }

    Ok(())
}

fn find_start<'a>(line: &str, markers: &[MarkerPair<'a>]) -> Option<MarkerPair<'a>> {
    markers.iter().copied().find(|pair| line.contains(pair.start))
}

/// Drop every section between a start marker and its end marker.
///
/// The start-marker line is dropped and the end-marker line is kept. Start
/// markers seen while a section is open are ignored. A section with no end
/// marker runs to the end of the input.
pub fn filter_lines(lines: Vec<String>, markers: &[MarkerPair<'_>]) -> (Vec<String>, FilterReport) {
    let mut report = FilterReport {
        lines_read: lines.len(),
        ..FilterReport::default()
    };
    let mut state = SkipState::Passing;
    let mut kept = Vec::with_capacity(lines.len());

    for (number, line) in lines.into_iter().enumerate() {
        match state {
            SkipState::Passing => {
                if let Some(pair) = find_start(&line, markers) {
                    debug!("Line {}: '{}' opens a section", number, pair.start);
                    state = SkipState::Skipping {
                        end_marker: pair.end,
                    };
                    report.sections_removed += 1;
                } else {
                    kept.push(line);
                }
            }
            SkipState::Skipping { end_marker } => {
                if line.contains(end_marker) {
                    debug!("Line {}: '{}' closes the section", number, end_marker);
                    state = SkipState::Passing;
                    kept.push(line);
                }
            }
        }
    }

    if let SkipState::Skipping { end_marker } = state {
        warn!(
            "End marker '{}' never found, dropped everything after its section start",
            end_marker
        );
        report.unterminated = Some(end_marker.to_string());
    }

    report.lines_written = kept.len();
    (kept, report)
}

/// Apply the plan's edits, then its marker scan
pub fn transform_lines(
    mut lines: Vec<String>,
    plan: &CleanupPlan<'_>,
) -> FilterResult<(Vec<String>, FilterReport)> {
    apply_line_edits(&mut lines, plan.edits)?;
    Ok(filter_lines(lines, plan.markers))
}
