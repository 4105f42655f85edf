//! Report options and top-level error type.

use std::path::PathBuf;

use dnaweaver_io_xlsx::{
    EnumAutofitColumnsRule, SpecAutofitCellsPolicy, SpecXlsxSheetWriteOptions,
    SpecXlsxWriteOptions,
};
use polars::prelude::PolarsError;
use thiserror::Error;

/// Options for one report write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecReportOptions {
    /// Workbook-wide value/format options.
    pub write_options: SpecXlsxWriteOptions,
    /// Column width inference applied to every sheet.
    pub policy_autofit: SpecAutofitCellsPolicy,
    /// Freeze the key column next to the header row.
    pub if_freeze_index: bool,
}

impl Default for SpecReportOptions {
    fn default() -> Self {
        Self {
            write_options: SpecXlsxWriteOptions::default(),
            policy_autofit: SpecAutofitCellsPolicy {
                rule_columns: EnumAutofitColumnsRule::All,
                ..Default::default()
            },
            if_freeze_index: true,
        }
    }
}

impl SpecReportOptions {
    /// Per-sheet kernel options; the first column is the key column.
    pub fn derive_sheet_write_options(&self) -> SpecXlsxSheetWriteOptions {
        SpecXlsxSheetWriteOptions {
            n_cols_index: 1,
            col_freeze: usize::from(self.if_freeze_index),
            row_freeze: None,
            if_keep_missing_values: None,
            policy_autofit: self.policy_autofit.clone(),
        }
    }
}

/// Report write failure. Nothing is saved when any of these is returned.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Rows could not be assembled into a table.
    #[error("Failed to build table for sheet {sheet_name:?}: {source}")]
    Table {
        sheet_name: String,
        #[source]
        source: PolarsError,
    },
    /// The kernel rejected the sheet.
    #[error("Failed to write sheet {sheet_name:?}: {message}")]
    Sheet { sheet_name: String, message: String },
    /// Saving the workbook failed.
    #[error("Failed to save report {}: {message}", path.display())]
    Close { path: PathBuf, message: String },
}
