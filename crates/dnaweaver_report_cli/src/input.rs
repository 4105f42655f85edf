use std::path::{Path, PathBuf};

use dnaweaver_report::{ReportError, SpecAssemblyReport};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportCliError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Load a planning result from a JSON file.
pub fn read_report_json(path: &Path) -> Result<SpecAssemblyReport, ReportCliError> {
    let c_text = std::fs::read_to_string(path).map_err(|source| ReportCliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&c_text).map_err(|source| ReportCliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_report_json_ok() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("plan.json");
        std::fs::write(
            &path,
            r#"{"construct_parts": {"C1": ["p1", "p2"]}, "errors": {"C2": "No valid assembly found"}}"#,
        )
        .expect("write json");

        let report = read_report_json(&path).expect("read report");
        assert_eq!(report.construct_parts["C1"], vec!["p1", "p2"]);
        assert_eq!(report.errors.len(), 1);
        assert!(report.quotes.is_empty());
    }

    #[test]
    fn test_read_report_json_errors() {
        let tmp = tempfile::tempdir().expect("tempdir");

        let err = read_report_json(&tmp.path().join("missing.json")).expect_err("missing");
        assert!(matches!(err, ReportCliError::ReadInput { .. }));

        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{\"quotes\": [").expect("write json");
        let err = read_report_json(&path).expect_err("broken");
        assert!(matches!(err, ReportCliError::ParseInput { .. }));
    }
}
