pub mod line_filter;
pub mod operations;

pub use line_filter::{
    apply_line_edits, filter_lines, split_lines, transform_lines, FilterReport, SkipState,
};
pub use operations::{cleanup_file, read_lines, write_lines};
