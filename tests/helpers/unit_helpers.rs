//! Helpers for loading fixture units from disk.

use std::fs;

use gosyn::{SourceUnit, UnitMap, load_unit, unit_map};
use tempfile::TempDir;

/// Write `files` into a fresh directory.
pub fn write_files(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for (name, text) in files {
        fs::write(dir.path().join(name), text).expect("write fixture");
    }
    dir
}

/// Load every fixture back through `load_unit`, in the given order.
pub fn load_units(files: &[(&str, &str)]) -> (TempDir, UnitMap) {
    let dir = write_files(files);
    let units: Vec<SourceUnit> = files
        .iter()
        .map(|(name, _)| load_unit(dir.path().join(name)).expect("fixture parses"))
        .collect();
    (dir, unit_map(units))
}

/// The file name part of a unit name.
pub fn file_name(unit: &str) -> &str {
    unit.rsplit(['/', '\\']).next().unwrap_or(unit)
}

/// Position `delta` bytes into the first occurrence of `needle`.
pub fn at(source: &str, needle: &str, delta: usize) -> gosyn::Position {
    let start = source
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not in source"));
    let offset = gosyn::TextSize::from((start + delta) as u32);
    let line_col = gosyn::LineIndex::new(source).line_col(offset);
    gosyn::Position::with_offset(line_col.line as usize, line_col.col as usize, offset)
}
