//! Report entry points: tables -> one workbook on disk.

use std::path::{Path, PathBuf};

use dnaweaver_io_xlsx::{
    N_NROWS_EXCEL_MAX, SpecXlsxReport, SpecXlsxSheetWriteOptions, XlsxWriter, plan_sheet_slices,
};
use log::{debug, info};

use crate::conf::C_REPORT_FILE_OUT_DEFAULT;
use crate::model::{
    MapConstructParts, MapConstructQuotes, MapErrors, MapFragmentQuotes, MapSequences,
    SpecAssemblyReport,
};
use crate::spec::{ReportError, SpecReportOptions};
use crate::table::{SpecSheetTable, tabulate_report};

/// Write the planning results as a seven-sheet spreadsheet.
///
/// `target` defaults to [`C_REPORT_FILE_OUT_DEFAULT`]. An existing file is
/// overwritten only when every sheet was written successfully.
#[allow(clippy::too_many_arguments)]
pub fn write_report(
    quotes: &MapConstructQuotes,
    primer_sequences: &MapSequences,
    fragment_quotes: &MapFragmentQuotes,
    errors: &MapErrors,
    part_sequences: &MapSequences,
    construct_parts: &MapConstructParts,
    construct_sequences: &MapSequences,
    target: Option<&Path>,
) -> Result<(), ReportError> {
    let l_tables = tabulate_report(
        quotes,
        primer_sequences,
        fragment_quotes,
        errors,
        part_sequences,
        construct_parts,
        construct_sequences,
    );
    write_tables(&l_tables, target, &SpecReportOptions::default())?;
    Ok(())
}

/// Same as [`write_report`] with explicit options; returns per-sheet reports.
pub fn write_report_with_options(
    report: &SpecAssemblyReport,
    target: Option<&Path>,
    options: &SpecReportOptions,
) -> Result<Vec<SpecXlsxReport>, ReportError> {
    write_tables(&report.tables(), target, options)
}

impl SpecAssemblyReport {
    /// Write this report with default options.
    pub fn write(&self, target: Option<&Path>) -> Result<(), ReportError> {
        write_report_with_options(self, target, &SpecReportOptions::default())?;
        Ok(())
    }
}

/// Write tables in order to one workbook, then save it.
pub fn write_tables(
    tables: &[SpecSheetTable],
    target: Option<&Path>,
    options: &SpecReportOptions,
) -> Result<Vec<SpecXlsxReport>, ReportError> {
    let path_file_out = target
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(C_REPORT_FILE_OUT_DEFAULT));
    let sheet_options = options.derive_sheet_write_options();

    let mut writer = XlsxWriter::with_options(path_file_out.clone(), options.write_options.clone());
    for table in tables {
        write_rows_to_sheet(&mut writer, table, &sheet_options)?;
    }
    writer.close().map_err(|message| ReportError::Close {
        path: path_file_out.clone(),
        message,
    })?;

    info!(
        "Wrote assembly report {} ({} sheets).",
        path_file_out.display(),
        writer.sheet_names().len()
    );
    Ok(writer.report())
}

/// Reject a table the kernel would split over several sheets.
///
/// Every report table must land on exactly its own named sheet.
pub fn validate_table_fits_one_sheet(
    sheet_name: &str,
    n_height: usize,
    n_width: usize,
) -> Result<(), ReportError> {
    let derive_error = |message: String| ReportError::Sheet {
        sheet_name: sheet_name.to_string(),
        message,
    };
    let mut report = SpecXlsxReport::default();
    let l_slices =
        plan_sheet_slices(n_height, n_width, 1, sheet_name, &mut report).map_err(derive_error)?;
    if l_slices.len() > 1 {
        return Err(derive_error(format!(
            "{n_height} row(s) x {n_width} column(s) do not fit one worksheet (at most {} data rows).",
            N_NROWS_EXCEL_MAX - 1
        )));
    }
    Ok(())
}

/// Write one table to its named sheet; the key column is column 0.
pub fn write_rows_to_sheet(
    writer: &mut XlsxWriter,
    table: &SpecSheetTable,
    options: &SpecXlsxSheetWriteOptions,
) -> Result<(), ReportError> {
    validate_table_fits_one_sheet(table.sheet_name, table.height(), table.columns.len())?;
    let df_table = table.to_dataframe().map_err(|source| ReportError::Table {
        sheet_name: table.sheet_name.to_string(),
        source,
    })?;
    writer
        .write_sheet_from_dataframes(&df_table, table.sheet_name, options)
        .map_err(|message| ReportError::Sheet {
            sheet_name: table.sheet_name.to_string(),
            message,
        })?;
    debug!("Sheet {:?}: {} row(s).", table.sheet_name, table.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use calamine::{Data, Reader, Xlsx, open_workbook};
    use dnaweaver_io_xlsx::{EnumLongTextMode, N_LEN_EXCEL_CELL_TEXT_MAX, SpecXlsxValuePolicy};

    use super::*;
    use crate::conf::TUP_REPORT_SHEET_NAMES;
    use crate::model::{EnumOperationType, Quote, SpecAssemblyPlanEntry, SpecSegmentLocation};

    fn read_sheet_names(path: &Path) -> Vec<String> {
        let workbook: Xlsx<_> = open_workbook(path).expect("open workbook");
        workbook.sheet_names()
    }

    fn read_rows(path: &Path, sheet_name: &str) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook(path).expect("open workbook");
        let range = workbook.worksheet_range(sheet_name).expect("sheet range");
        range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::Empty => String::new(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect()
    }

    fn create_plan_entry(n_start: usize, quote: Quote) -> SpecAssemblyPlanEntry {
        SpecAssemblyPlanEntry {
            location: SpecSegmentLocation {
                start: n_start,
                end: n_start + quote.sequence.len(),
            },
            quote,
        }
    }

    fn create_report() -> SpecAssemblyReport {
        let mut report = SpecAssemblyReport::default();

        let mut library_part = Quote::new("L1", "parts_library", EnumOperationType::Library, "ATG");
        library_part.metadata.part_name = Some("P1".to_string());
        let mut fragment = Quote::new("F7", "pcr_station", EnumOperationType::Pcr, "GGCCTT");
        fragment.metadata.subject = Some("p2".to_string());
        fragment.assembly_plan = vec![
            create_plan_entry(0, Quote::new("PR1", "oligos", EnumOperationType::Synthesis, "GG")),
            create_plan_entry(4, Quote::new("PR2", "oligos", EnumOperationType::Synthesis, "TT")),
        ];

        let mut construct = Quote::new("Q1", "gibson", EnumOperationType::Assembly, "ATGGGCCTT");
        construct.assembly_plan = vec![
            create_plan_entry(0, library_part),
            create_plan_entry(3, fragment.clone()),
        ];

        report.quotes.insert("C1".to_string(), construct);
        report.fragment_quotes.insert("F7".to_string(), fragment);
        report
            .primer_sequences
            .insert("PR2".to_string(), "TT".to_string());
        report
            .primer_sequences
            .insert("PR1".to_string(), "GG".to_string());
        report
            .part_sequences
            .insert("p2".to_string(), "GGCCTT".to_string());
        report
            .part_sequences
            .insert("P1".to_string(), "ATG".to_string());
        report.construct_parts.insert(
            "C1".to_string(),
            vec!["P1".to_string(), "p2".to_string()],
        );
        report
            .construct_sequences
            .insert("C1".to_string(), "ATGGGCCTT".to_string());
        report
            .construct_sequences
            .insert("C0".to_string(), "ATGTTT".to_string());
        report
            .errors
            .insert("C2".to_string(), "No valid assembly found".to_string());
        report
    }

    #[test]
    fn test_write_report_sheets_and_rows() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("plan.xlsx");
        let report = create_report();

        write_report(
            &report.quotes,
            &report.primer_sequences,
            &report.fragment_quotes,
            &report.errors,
            &report.part_sequences,
            &report.construct_parts,
            &report.construct_sequences,
            Some(&path),
        )
        .expect("write report");

        assert_eq!(read_sheet_names(&path), TUP_REPORT_SHEET_NAMES);

        assert_eq!(
            read_rows(&path, "construct_parts"),
            vec![vec!["construct", "parts"], vec!["C1", "P1 + p2"]]
        );
        assert_eq!(
            read_rows(&path, "construct_sequences"),
            vec![
                vec!["construct", "sequence"],
                vec!["C1", "ATGGGCCTT"],
                vec!["C0", "ATGTTT"],
            ]
        );
        assert_eq!(
            read_rows(&path, "primer_sequences"),
            vec![
                vec!["primer", "sequence"],
                vec!["PR1", "GG"],
                vec!["PR2", "TT"],
            ]
        );
        assert_eq!(
            read_rows(&path, "part_sequences"),
            vec![
                vec!["part", "sequence"],
                vec!["P1", "ATG"],
                vec!["p2", "GGCCTT"],
            ]
        );
        assert_eq!(
            read_rows(&path, "fragment_extensions"),
            vec![
                vec!["fragment_id", "part", "primers", "fragment_sequence"],
                vec!["F7", "p2", "PR1 + PR2", "GGCCTT"],
            ]
        );
        assert_eq!(
            read_rows(&path, "assembly_plan"),
            vec![
                vec!["construct", "method", "fragments"],
                vec!["C1", "gibson", "P1 + F7"],
            ]
        );
        assert_eq!(
            read_rows(&path, "errors"),
            vec![
                vec!["construct", "error"],
                vec!["C2", "No valid assembly found"],
            ]
        );
    }

    #[test]
    fn test_empty_inputs_produce_header_only_sheets() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("empty.xlsx");

        SpecAssemblyReport::default()
            .write(Some(&path))
            .expect("write report");

        assert_eq!(read_sheet_names(&path), TUP_REPORT_SHEET_NAMES);
        for c_sheet in TUP_REPORT_SHEET_NAMES {
            assert_eq!(read_rows(&path, c_sheet).len(), 1, "sheet {c_sheet}");
        }
    }

    #[test]
    fn test_custom_target_is_used_instead_of_default() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("nested_name.xlsx");

        create_report().write(Some(&path)).expect("write report");

        assert!(path.exists());
        assert!(!tmp.path().join(C_REPORT_FILE_OUT_DEFAULT).exists());
    }

    #[test]
    fn test_failed_write_leaves_existing_file_untouched() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("plan.xlsx");
        std::fs::write(&path, b"previous").expect("seed file");

        let mut report = create_report();
        report.construct_sequences.insert(
            "genome".to_string(),
            "A".repeat(N_LEN_EXCEL_CELL_TEXT_MAX + 1),
        );

        let err = report.write(Some(&path)).expect_err("overlong sequence");
        assert!(matches!(
            err,
            ReportError::Sheet { ref sheet_name, .. } if sheet_name == "construct_sequences"
        ));
        assert_eq!(std::fs::read(&path).expect("read file"), b"previous");
    }

    #[test]
    fn test_truncate_option_reports_warning() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("plan.xlsx");

        let mut report = SpecAssemblyReport::default();
        report.construct_sequences.insert(
            "genome".to_string(),
            "A".repeat(N_LEN_EXCEL_CELL_TEXT_MAX + 1),
        );

        let mut options = SpecReportOptions::default();
        options.write_options.value_policy = SpecXlsxValuePolicy {
            rule_long_text: EnumLongTextMode::Truncate,
            ..Default::default()
        };

        let l_reports =
            write_report_with_options(&report, Some(&path), &options).expect("write report");
        assert_eq!(l_reports.len(), TUP_REPORT_SHEET_NAMES.len());
        assert_eq!(l_reports[1].warnings.len(), 1);
        assert_eq!(
            read_rows(&path, "construct_sequences")[1][1].len(),
            N_LEN_EXCEL_CELL_TEXT_MAX
        );
    }

    #[test]
    fn test_table_over_row_limit_is_rejected() {
        let n_rows_data_max = N_NROWS_EXCEL_MAX - 1;
        assert!(validate_table_fits_one_sheet("primer_sequences", n_rows_data_max, 2).is_ok());
        assert!(validate_table_fits_one_sheet("primer_sequences", 0, 2).is_ok());

        let err = validate_table_fits_one_sheet("primer_sequences", N_NROWS_EXCEL_MAX, 2)
            .expect_err("too many rows");
        assert!(matches!(
            err,
            ReportError::Sheet { ref sheet_name, ref message }
                if sheet_name == "primer_sequences" && message.contains("do not fit")
        ));
    }

    #[test]
    fn test_unwritable_target_is_close_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("missing_dir").join("plan.xlsx");

        let err = create_report().write(Some(&path)).expect_err("missing dir");
        assert!(matches!(err, ReportError::Close { .. }));
    }
}
