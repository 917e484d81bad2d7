//! Local directory scanning: a single flat listing filtered by file-name
//! suffix. No recursion, no MIME sniffing.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::IngestError;

/// Suffixes accepted for upload. Matching is case-sensitive, so `scan.PDF`
/// is skipped.
pub const ALLOWED_SUFFIXES: [&str; 2] = [".pdf", ".xlsx"];

/// Returns true when the file name carries one of the allowed suffixes.
pub fn is_ingestible(file_name: &str) -> bool {
    ALLOWED_SUFFIXES.iter().any(|s| file_name.ends_with(s))
}

/// Lists the entries of `dir` whose name matches [`is_ingestible`], in the
/// order the filesystem yields them (no sorting imposed).
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::local_io(dir, e))?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::local_io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_ingestible(&name) {
            matches.push(entry.path());
        } else {
            debug!(file = %name, "Skipping entry without an allowed suffix");
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;
    use tempfile::tempdir;

    #[test]
    fn accepts_pdf_and_xlsx_suffixes_only() {
        assert!(is_ingestible("report.pdf"));
        assert!(is_ingestible("sheet.xlsx"));
        assert!(!is_ingestible("notes.txt"));
        assert!(!is_ingestible("archive.pdf.bak"));
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert!(!is_ingestible("SCAN.PDF"));
        assert!(!is_ingestible("Sheet.XLSX"));
    }

    #[test]
    fn scan_lists_only_matching_entries() {
        let dir = tempdir().expect("tempdir");
        write(dir.path().join("report.pdf"), b"pdf").unwrap();
        write(dir.path().join("notes.txt"), b"txt").unwrap();
        write(dir.path().join("sheet.xlsx"), b"xlsx").unwrap();

        let mut names: Vec<String> = scan_directory(dir.path())
            .expect("scan should succeed")
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, vec!["report.pdf", "sheet.xlsx"]);
    }

    #[test]
    fn scan_missing_directory_is_a_local_io_error() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("does-not-exist");

        let err = scan_directory(&missing).expect_err("scan should fail");
        match err {
            IngestError::LocalIo { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected LocalIo error, got: {other:?}"),
        }
    }
}
