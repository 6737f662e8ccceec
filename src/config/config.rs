use std::fmt;

/// Dashboard component, relative to the project root
pub const DASHBOARD_PATH: &str = "frontend/src/components/dashboard/Dashboard.jsx";

/// A fixed-position edit applied before the marker scan.
///
/// Indices are zero-based positions in the document as it was read. Blanking
/// keeps the slot so that later indices keep pointing at the same lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit<'a> {
    /// Remove every occurrence of `needle` from the line
    RemoveSubstring { index: usize, needle: &'a str },
    /// Replace the whole line, terminator included, with an empty string
    Blank { index: usize },
}

impl LineEdit<'_> {
    pub fn index(&self) -> usize {
        match self {
            LineEdit::RemoveSubstring { index, .. } | LineEdit::Blank { index } => *index,
        }
    }
}

impl fmt::Display for LineEdit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEdit::RemoveSubstring { index, needle } => {
                write!(f, "Remove '{}' from line {}", needle, index)
            }
            LineEdit::Blank { index } => write!(f, "Blank line {}", index),
        }
    }
}

/// Start and end substrings delimiting a section to drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPair<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl<'a> MarkerPair<'a> {
    pub const fn new(start: &'a str, end: &'a str) -> Self {
        Self { start, end }
    }
}

/// Import cleanup for the dashboard component.
///
/// Assumes the file still has its original shape: the `KPIComparisonCard`
/// import shares line 4 with `StatsCard`, and lines 7-9 are the
/// `RevenueDeepDive`, `GuestAnalyticsDashboard` and `AIInsightsPanel` imports.
/// None of these lines may contain a section marker.
pub const DASHBOARD_IMPORT_EDITS: &[LineEdit<'static>] = &[
    LineEdit::RemoveSubstring {
        index: 4,
        needle: ", KPIComparisonCard",
    },
    LineEdit::Blank { index: 7 },
    LineEdit::Blank { index: 8 },
    LineEdit::Blank { index: 9 },
];

/// Sections to drop, checked in this order
pub const DASHBOARD_SECTION_MARKERS: &[MarkerPair<'static>] = &[
    MarkerPair::new("KPI Comparison Cards", "PHASE 1: Today"),
    MarkerPair::new("Revenue Deep Dive", "PHASE 3: Occupancy Calendar"),
    MarkerPair::new("Guest Analytics Dashboard", "PHASE 3: Real-Time Activity"),
    MarkerPair::new("AI Insights Panel", "Primary KPI Cards"),
];

/// The full set of edits and markers for one cleanup run
#[derive(Debug, Clone, Copy)]
pub struct CleanupPlan<'a> {
    pub edits: &'a [LineEdit<'a>],
    pub markers: &'a [MarkerPair<'a>],
}

impl<'a> CleanupPlan<'a> {
    pub fn new(edits: &'a [LineEdit<'a>], markers: &'a [MarkerPair<'a>]) -> Self {
        Self { edits, markers }
    }

    pub fn dashboard() -> CleanupPlan<'static> {
        CleanupPlan::new(DASHBOARD_IMPORT_EDITS, DASHBOARD_SECTION_MARKERS)
    }

    /// Smallest document length the edits can be applied to
    pub fn min_lines(&self) -> usize {
        self.edits.iter().map(|e| e.index() + 1).max().unwrap_or(0)
    }
}

impl Default for CleanupPlan<'static> {
    fn default() -> Self {
        Self::dashboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_plan_shape() {
        let plan = CleanupPlan::default();
        assert_eq!(plan.edits.len(), 4);
        assert_eq!(plan.markers.len(), 4);
        assert_eq!(plan.min_lines(), 10);
        assert_eq!(plan.markers[0].end, "PHASE 1: Today");
    }

    #[test]
    fn test_edits_do_not_mention_markers() {
        for edit in DASHBOARD_IMPORT_EDITS {
            if let LineEdit::RemoveSubstring { needle, .. } = edit {
                for pair in DASHBOARD_SECTION_MARKERS {
                    assert!(!needle.contains(pair.start));
                    assert!(!needle.contains(pair.end));
                }
            }
        }
    }

    #[test]
    fn test_edit_display() {
        assert_eq!(LineEdit::Blank { index: 8 }.to_string(), "Blank line 8");
        assert_eq!(
            DASHBOARD_IMPORT_EDITS[0].to_string(),
            "Remove ', KPIComparisonCard' from line 4"
        );
    }

    #[test]
    fn test_empty_plan_needs_no_lines() {
        let plan = CleanupPlan::new(&[], DASHBOARD_SECTION_MARKERS);
        assert_eq!(plan.min_lines(), 0);
    }
}
