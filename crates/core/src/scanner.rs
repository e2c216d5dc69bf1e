//! Non-recursive enumeration of PDF candidates in a directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Candidate filtering is a plain substring test on the file name, not a
/// suffix check, so `report.pdf.bak` is still a candidate.
const PDF_MARKER: &str = ".pdf";

/// Returns the regular files in `dir` (subdirectories are not descended
/// into) whose name contains the PDF marker, in directory listing order.
pub fn scan(dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().contains(PDF_MARKER) {
            candidates.push(entry.into_path());
        }
    }
    candidates
}
