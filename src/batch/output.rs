//! Solution formatting and writing.

use std::fs;
use std::path::Path;

use super::BatchError;
use crate::schema::Layout;

/// Output file name for an input file: every `"input"` becomes `"output"`.
pub fn output_file_name(input_name: &str) -> String {
    input_name.replace("input", "output")
}

/// One `<row> <col> <orientation> <word>` line per placement, in gene order.
pub fn format_layout(layout: &Layout) -> String {
    layout
        .placements()
        .iter()
        .map(|p| format!("{} {} {} {}\n", p.row, p.col, p.orientation, p.word()))
        .collect()
}

/// Write a layout to `path`.
pub fn write_layout(path: &Path, layout: &Layout) -> Result<(), BatchError> {
    fs::write(path, format_layout(layout)).map_err(|source| BatchError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
