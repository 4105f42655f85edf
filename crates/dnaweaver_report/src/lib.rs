//! `dnaweaver_report` v1:
//! Spreadsheet report of a DNA assembly planning run.
//!
//! - `model`  : quotes and planning-result collections
//! - `conf`   : sheet names, headers and defaults
//! - `spec`   : options and errors
//! - `table`  : component-id resolution and per-sheet row shaping
//! - `writer` : `write_report` entry points
pub mod conf;
pub mod model;
pub mod spec;
pub mod table;
pub mod writer;

pub use conf::{
    C_COMPONENT_ID_PLACEHOLDER, C_COMPONENT_ID_SEP, C_REPORT_FILE_OUT_DEFAULT,
    TUP_REPORT_SHEET_NAMES,
};
pub use model::{
    EnumOperationType, MapConstructParts, MapConstructQuotes, MapErrors, MapFragmentQuotes,
    MapSequences, Quote, QuoteMetadata, QuoteSource, SpecAssemblyPlanEntry, SpecAssemblyReport,
    SpecSegmentLocation,
};
pub use spec::{ReportError, SpecReportOptions};
pub use table::{
    SpecSheetTable, join_quote_components_ids, quote_components_ids, resolve_component_id,
    tabulate_report,
};
pub use writer::{
    validate_table_fits_one_sheet, write_report, write_report_with_options, write_rows_to_sheet,
    write_tables,
};
