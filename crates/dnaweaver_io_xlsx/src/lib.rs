//! `dnaweaver_io_xlsx` v1:
//! Rust-side XLSX sheet-writer kernel.
//!
//! - `conf`   : constants and default presets
//! - `spec`   : specs/models/options
//! - `util`   : pure helper functions
//! - `writer` : DataFrame -> worksheet writer
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    EnumFmtKey, N_LEN_EXCEL_CELL_TEXT_MAX, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
pub use spec::{
    EnumAutofitColumnsRule, EnumCellValue, EnumLongTextMode, SpecAutofitCellsPolicy,
    SpecCellFormat, SpecSheetSlice, SpecXlsxReport, SpecXlsxSheetWriteOptions,
    SpecXlsxValuePolicy, SpecXlsxWriteOptions,
};
pub use util::{create_sheet_identifier, plan_sheet_slices, sanitize_sheet_name};
pub use writer::XlsxWriter;
