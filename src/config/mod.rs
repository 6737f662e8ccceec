// Configuration module for dashboard-trim
// Everything is compiled in; the only runtime knob is RUST_LOG

#[allow(clippy::module_inception)]
pub mod config;

// Re-export main types for easier access
pub use config::{
    CleanupPlan, LineEdit, MarkerPair, DASHBOARD_IMPORT_EDITS, DASHBOARD_PATH,
    DASHBOARD_SECTION_MARKERS,
};
