//! XLSX writer kernel that converts in-memory DataFrames into workbook sheets.

use std::collections::BTreeSet;
use std::path::PathBuf;

use log::{debug, warn};
use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::conf::{EnumFmtKey, N_LEN_EXCEL_SHEET_NAME_MAX, derive_default_xlsx_format};
use crate::spec::{
    EnumAutofitColumnsRule, EnumCellValue, SpecAutofitCellsPolicy, SpecCellFormat,
    SpecSheetSlice, SpecXlsxReport, SpecXlsxSheetWriteOptions, SpecXlsxWriteOptions,
};
use crate::util::{
    apply_long_text_policy, convert_cell_value, estimate_unicode_string_width, plan_sheet_slices,
    sanitize_sheet_name, validate_unique_columns,
};

/// Stateful workbook writer.
///
/// Sheets are buffered in memory; nothing touches the filesystem until
/// [`Self::close`] succeeds. Dropping an unclosed writer discards the workbook.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_text: SpecCellFormat,
    fmt_header: SpecCellFormat,
    fmt_index: SpecCellFormat,
    write_options: SpecXlsxWriteOptions,
    set_sheet_names_existing: BTreeSet<String>,
    l_sheet_names_ordered: Vec<String>,
    l_reports: Vec<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and format/options presets.
    pub fn new(
        path_file_out: PathBuf,
        fmt_text: SpecCellFormat,
        fmt_header: SpecCellFormat,
        fmt_index: SpecCellFormat,
        write_options: SpecXlsxWriteOptions,
    ) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_text,
            fmt_header,
            fmt_index,
            write_options,
            set_sheet_names_existing: BTreeSet::new(),
            l_sheet_names_ordered: Vec::new(),
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Create writer with the default format presets.
    pub fn with_options(path_file_out: PathBuf, write_options: SpecXlsxWriteOptions) -> Self {
        Self::new(
            path_file_out,
            derive_default_xlsx_format(EnumFmtKey::Text),
            derive_default_xlsx_format(EnumFmtKey::Header),
            derive_default_xlsx_format(EnumFmtKey::Index),
            write_options,
        )
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> &[String] {
        &self.l_sheet_names_ordered
    }

    /// Return immutable snapshot of per-sheet write reports.
    pub fn report(&self) -> Vec<SpecXlsxReport> {
        self.l_reports.clone()
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), String> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(derive_xlsx_error_text)?;
        self.if_closed = true;
        debug!(
            "Saved workbook {} with {} sheet(s).",
            self.path_file_out.display(),
            self.l_sheet_names_ordered.len()
        );
        Ok(())
    }

    /// Write one sheet from an in-memory dataframe.
    pub fn write_sheet_from_dataframes(
        &mut self,
        df_data: &DataFrame,
        sheet_name: &str,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<(), String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }
        self.write_sheet(df_data, sheet_name, options)
    }

    fn write_sheet(
        &mut self,
        df_data: &DataFrame,
        sheet_name: &str,
        options: &SpecXlsxSheetWriteOptions,
    ) -> Result<(), String> {
        validate_policy_autofit(&options.policy_autofit)?;

        let if_keep_missing_values = options
            .if_keep_missing_values
            .unwrap_or(self.write_options.keep_missing_values);
        let value_policy = self.write_options.value_policy.clone();

        let l_colnames_df: Vec<String> = df_data
            .get_column_names_str()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        validate_unique_columns(&l_colnames_df)?;

        let n_width_df = l_colnames_df.len();
        let n_height_df = df_data.height();
        let n_rows_header = 1usize;

        let mut report = SpecXlsxReport::default();

        let l_sheet_parts = plan_sheet_slices(
            n_height_df,
            n_width_df,
            n_rows_header,
            &sanitize_sheet_name(sheet_name, "_"),
            &mut report,
        )?;

        let n_row_freeze = options.row_freeze.unwrap_or(n_rows_header);
        let fmt_header = derive_rust_xlsx_format(&self.fmt_header);

        for sheet_slice in l_sheet_parts {
            let sheet_name_unique = self.derive_unique_sheet_name(&sheet_slice.sheet_name);
            let n_width_slice = sheet_slice.col_end_exclusive - sheet_slice.col_start_inclusive;

            let l_fmt_data_by_col: Vec<Format> = (sheet_slice.col_start_inclusive
                ..sheet_slice.col_end_exclusive)
                .map(|n_idx_col_abs| {
                    derive_rust_xlsx_format(
                        &self.derive_column_format(n_idx_col_abs, options.n_cols_index),
                    )
                })
                .collect();

            let worksheet = self.workbook.add_worksheet();
            worksheet
                .set_name(&sheet_name_unique)
                .map_err(derive_xlsx_error_text)?;

            let l_header_slice =
                &l_colnames_df[sheet_slice.col_start_inclusive..sheet_slice.col_end_exclusive];
            write_header(worksheet, l_header_slice, &fmt_header)?;

            if let Some((n_row, n_col)) = derive_freeze_panes(n_row_freeze, options.col_freeze)? {
                worksheet
                    .set_freeze_panes(n_row, n_col)
                    .map_err(derive_xlsx_error_text)?;
            }

            let if_autofit_columns = !matches!(
                options.policy_autofit.rule_columns,
                EnumAutofitColumnsRule::None
            );
            let l_width_by_col_header: Vec<usize> = l_header_slice
                .iter()
                .map(|c_name| estimate_unicode_string_width(c_name))
                .collect();
            let mut l_width_by_col_body = vec![0usize; n_width_slice];

            let n_rows_data_this_sheet = sheet_slice.height();
            let l_cols_slice: Vec<_> = (sheet_slice.col_start_inclusive
                ..sheet_slice.col_end_exclusive)
                .map(|n_idx_col_abs| {
                    df_data.get_columns()[n_idx_col_abs]
                        .slice(sheet_slice.row_start_inclusive as i64, n_rows_data_this_sheet)
                })
                .collect();

            let n_rows_autofit_max = options
                .policy_autofit
                .height_body_inferred_max
                .unwrap_or(usize::MAX);

            for n_row_local in 0..n_rows_data_this_sheet {
                for (n_idx_col, col) in l_cols_slice.iter().enumerate() {
                    let value_raw = derive_cell_value_from_any_value(
                        col.get(n_row_local)
                            .map_err(|err| format!("Failed to access cell value: {err}"))?,
                    );
                    let mut value =
                        convert_cell_value(&value_raw, if_keep_missing_values, &value_policy);

                    if let EnumCellValue::String(c_text) = &value {
                        let (c_text_final, if_truncated) =
                            apply_long_text_policy(c_text, &value_policy).map_err(|err| {
                                format!(
                                    "Sheet {sheet_name_unique:?}, row {}, column {:?}: {err}",
                                    sheet_slice.row_start_inclusive + n_row_local,
                                    l_header_slice[n_idx_col]
                                )
                            })?;
                        if if_truncated {
                            report.warn(format!(
                                "Truncated text in sheet {sheet_name_unique:?}, row {}, column {:?}.",
                                sheet_slice.row_start_inclusive + n_row_local,
                                l_header_slice[n_idx_col]
                            ));
                            value = EnumCellValue::String(c_text_final);
                        }
                    }

                    if if_autofit_columns && n_row_local < n_rows_autofit_max {
                        l_width_by_col_body[n_idx_col] = usize::max(
                            l_width_by_col_body[n_idx_col],
                            estimate_width_len(&value),
                        );
                    }

                    write_cell_with_format(
                        worksheet,
                        n_rows_header + n_row_local,
                        n_idx_col,
                        &value,
                        &l_fmt_data_by_col[n_idx_col],
                    )?;
                }
            }

            if if_autofit_columns && n_width_slice > 0 {
                let n_min = usize::max(1, options.policy_autofit.width_cell_min);
                let n_max = usize::min(
                    255,
                    usize::max(n_min, options.policy_autofit.width_cell_max),
                );
                let n_pad = options.policy_autofit.width_cell_padding;

                for n_idx_col in 0..n_width_slice {
                    let n_width_recorded = match options.policy_autofit.rule_columns {
                        EnumAutofitColumnsRule::Header | EnumAutofitColumnsRule::None => {
                            l_width_by_col_header[n_idx_col]
                        }
                        EnumAutofitColumnsRule::Body => l_width_by_col_body[n_idx_col],
                        EnumAutofitColumnsRule::All => usize::max(
                            l_width_by_col_header[n_idx_col],
                            l_width_by_col_body[n_idx_col],
                        ),
                    };
                    let n_width_final =
                        usize::min(n_max, usize::max(n_min, n_width_recorded + n_pad));
                    worksheet
                        .set_column_width(cast_col_num(n_idx_col)?, n_width_final as f64)
                        .map_err(derive_xlsx_error_text)?;
                }
            }

            debug!(
                "Wrote sheet {sheet_name_unique:?}: {} row(s), {} column(s).",
                n_rows_data_this_sheet, n_width_slice
            );
            self.l_sheet_names_ordered.push(sheet_name_unique.clone());
            report.sheets.push(SpecSheetSlice {
                sheet_name: sheet_name_unique,
                ..sheet_slice
            });
        }

        for c_warning in &report.warnings {
            warn!("{c_warning}");
        }
        self.l_reports.push(report);
        Ok(())
    }

    /// Body format of one column: the first `n_cols_index` columns are key columns.
    fn derive_column_format(&self, n_idx_col_abs: usize, n_cols_index: usize) -> SpecCellFormat {
        let fmt_base = if n_idx_col_abs < n_cols_index {
            &self.fmt_index
        } else {
            &self.fmt_text
        };
        fmt_base.merge(&self.write_options.base_format_patch)
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate: String = format!("{base_name}__{n_idx}")
                .chars()
                .take(N_LEN_EXCEL_SHEET_NAME_MAX)
                .collect();
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }
}

impl Drop for XlsxWriter {
    fn drop(&mut self) {
        if !self.if_closed {
            debug!(
                "Discarding unsaved workbook for {}.",
                self.path_file_out.display()
            );
        }
    }
}

/// Estimate displayed width units for one normalized cell value.
pub fn estimate_width_len(value: &EnumCellValue) -> usize {
    match value {
        EnumCellValue::None => 0,
        EnumCellValue::String(s) => estimate_unicode_string_width(s),
    }
}

fn validate_policy_autofit(policy_autofit: &SpecAutofitCellsPolicy) -> Result<(), String> {
    if policy_autofit.width_cell_min == 0 {
        return Err("policy_autofit.width_cell_min must be >= 1.".to_string());
    }
    if policy_autofit.width_cell_max < policy_autofit.width_cell_min {
        return Err(
            "policy_autofit.width_cell_max must be >= policy_autofit.width_cell_min.".to_string(),
        );
    }
    Ok(())
}

/// Report frames are string-typed; any other dtype is rendered as its text.
fn derive_cell_value_from_any_value(value: AnyValue<'_>) -> EnumCellValue {
    match value {
        AnyValue::Null => EnumCellValue::None,
        AnyValue::String(val) => EnumCellValue::String(val.to_string()),
        AnyValue::StringOwned(val) => EnumCellValue::String(val.to_string()),
        _ => EnumCellValue::String(value.to_string()),
    }
}

fn write_header(
    worksheet: &mut Worksheet,
    header_row: &[String],
    fmt_header: &Format,
) -> Result<(), String> {
    for (col_idx, cell_value) in header_row.iter().enumerate() {
        worksheet
            .write_string_with_format(0, cast_col_num(col_idx)?, cell_value, fmt_header)
            .map_err(derive_xlsx_error_text)?;
    }
    Ok(())
}

/// Top-left cell of the frozen pane, or `None` when nothing is frozen.
fn derive_freeze_panes(
    n_row_freeze: usize,
    n_col_freeze: usize,
) -> Result<Option<(u32, u16)>, String> {
    if n_row_freeze == 0 && n_col_freeze == 0 {
        return Ok(None);
    }
    Ok(Some((cast_row_num(n_row_freeze)?, cast_col_num(n_col_freeze)?)))
}

/// Write one body cell.
///
/// Missing values and empty strings both become blank cells, so an empty
/// text reads back as an empty cell rather than `""`.
fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
) -> Result<(), String> {
    match value {
        EnumCellValue::None => {
            worksheet
                .write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::String(val) if val.is_empty() => {
            worksheet
                .write_blank(cast_row_num(row_idx)?, cast_col_num(col_idx)?, format)
                .map_err(derive_xlsx_error_text)?;
        }
        EnumCellValue::String(val) => {
            worksheet
                .write_string_with_format(
                    cast_row_num(row_idx)?,
                    cast_col_num(col_idx)?,
                    val,
                    format,
                )
                .map_err(derive_xlsx_error_text)?;
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }
    if let Some(val) = spec.top {
        format = format.set_border_top(derive_format_border(val));
    }
    if let Some(val) = spec.bottom {
        format = format.set_border_bottom(derive_format_border(val));
    }
    if let Some(val) = spec.left {
        format = format.set_border_left(derive_format_border(val));
    }
    if let Some(val) = spec.right {
        format = format.set_border_right(derive_format_border(val));
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        3 => FormatBorder::Dashed,
        4 => FormatBorder::Dotted,
        5 => FormatBorder::Thick,
        6 => FormatBorder::Double,
        7 => FormatBorder::Hair,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}

#[cfg(test)]
mod tests {
    use calamine::{Data, Reader, Xlsx, open_workbook};
    use polars::prelude::{Column, DataFrame, NamedFrom, Series};

    use super::*;
    use crate::conf::{N_LEN_EXCEL_CELL_TEXT_MAX, derive_default_xlsx_write_options};
    use crate::spec::{EnumLongTextMode, SpecXlsxValuePolicy};

    fn create_frame(l_cols: &[(&str, Vec<Option<String>>)]) -> DataFrame {
        let columns = l_cols
            .iter()
            .map(|(c_name, values)| Column::from(Series::new((*c_name).into(), values.clone())))
            .collect::<Vec<_>>();
        DataFrame::new(columns).expect("frame")
    }

    fn read_rows(path: &std::path::Path, sheet_name: &str) -> Vec<Vec<String>> {
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

    #[test]
    fn test_write_sheet_then_close_round_trips_text() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("out.xlsx");

        let df = create_frame(&[
            ("primer", vec![Some("P1".to_string()), Some("P2".to_string())]),
            ("sequence", vec![Some("ATGC".to_string()), None]),
        ]);

        let mut writer = XlsxWriter::with_options(path.clone(), derive_default_xlsx_write_options());
        writer
            .write_sheet_from_dataframes(&df, "primer_sequences", &Default::default())
            .expect("write sheet");
        writer.close().expect("close");

        let l_rows = read_rows(&path, "primer_sequences");
        assert_eq!(l_rows[0], vec!["primer", "sequence"]);
        assert_eq!(l_rows[1], vec!["P1", "ATGC"]);
        assert_eq!(l_rows[2][0], "P2");
        assert_eq!(l_rows[2].get(1).map(String::as_str).unwrap_or(""), "");
    }

    #[test]
    fn test_keep_missing_values_writes_placeholder() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("out.xlsx");

        let df = create_frame(&[
            ("fragment_id", vec![Some("F1".to_string())]),
            ("part", vec![None]),
        ]);
        let options = SpecXlsxSheetWriteOptions {
            if_keep_missing_values: Some(true),
            ..Default::default()
        };

        let mut writer = XlsxWriter::with_options(path.clone(), derive_default_xlsx_write_options());
        writer
            .write_sheet_from_dataframes(&df, "fragments", &options)
            .expect("write sheet");
        writer.close().expect("close");

        assert_eq!(read_rows(&path, "fragments")[1], vec!["F1", "NA"]);
    }

    #[test]
    fn test_close_is_idempotent_and_blocks_writes() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("out.xlsx");
        let df = create_frame(&[("construct", vec![Some("C1".to_string())])]);

        let mut writer = XlsxWriter::with_options(path.clone(), derive_default_xlsx_write_options());
        writer
            .write_sheet_from_dataframes(&df, "constructs", &Default::default())
            .expect("write sheet");
        writer.close().expect("close");
        writer.close().expect("second close");

        let err = writer
            .write_sheet_from_dataframes(&df, "more", &Default::default())
            .expect_err("write after close");
        assert!(err.contains("after close"));
        assert!(path.exists());
    }

    #[test]
    fn test_duplicate_sheet_names_are_suffixed() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("out.xlsx");
        let df = create_frame(&[("construct", vec![Some("C1".to_string())])]);

        let mut writer = XlsxWriter::with_options(path, derive_default_xlsx_write_options());
        writer
            .write_sheet_from_dataframes(&df, "errors", &Default::default())
            .expect("first");
        writer
            .write_sheet_from_dataframes(&df, "errors", &Default::default())
            .expect("second");

        assert_eq!(writer.sheet_names(), ["errors", "errors__2"]);
        assert_eq!(writer.report().len(), 2);
    }

    #[test]
    fn test_dropped_writer_leaves_no_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("out.xlsx");
        let df = create_frame(&[("construct", vec![Some("C1".to_string())])]);

        {
            let mut writer =
                XlsxWriter::with_options(path.clone(), derive_default_xlsx_write_options());
            writer
                .write_sheet_from_dataframes(&df, "errors", &Default::default())
                .expect("write sheet");
        }

        assert!(!path.exists());
    }

    #[test]
    fn test_empty_text_is_written_as_blank_cell() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("out.xlsx");
        let df = create_frame(&[
            ("construct", vec![Some("C1".to_string())]),
            ("sequence", vec![Some(String::new())]),
            ("note", vec![Some("x".to_string())]),
        ]);

        let mut writer = XlsxWriter::with_options(path.clone(), derive_default_xlsx_write_options());
        writer
            .write_sheet_from_dataframes(&df, "construct_sequences", &Default::default())
            .expect("write sheet");
        writer.close().expect("close");

        let mut workbook: Xlsx<_> = open_workbook(&path).expect("open workbook");
        let range = workbook
            .worksheet_range("construct_sequences")
            .expect("sheet range");
        assert_eq!(range.get_value((1, 0)), Some(&Data::String("C1".to_string())));
        assert!(matches!(range.get_value((1, 1)), None | Some(Data::Empty)));
    }

    #[test]
    fn test_key_columns_use_index_format() {
        let writer = XlsxWriter::with_options(
            std::path::PathBuf::from("unused.xlsx"),
            derive_default_xlsx_write_options(),
        );

        let fmt_key = writer.derive_column_format(0, 1);
        let fmt_body = writer.derive_column_format(1, 1);
        assert_eq!(fmt_key.bold, Some(true));
        assert_ne!(fmt_body.bold, Some(true));
        assert_eq!(fmt_key.border, Some(0));

        assert_ne!(writer.derive_column_format(0, 0).bold, Some(true));
    }

    #[test]
    fn test_derive_freeze_panes() {
        assert_eq!(derive_freeze_panes(1, 1).expect("freeze"), Some((1, 1)));
        assert_eq!(derive_freeze_panes(1, 0).expect("freeze"), Some((1, 0)));
        assert_eq!(derive_freeze_panes(0, 0).expect("freeze"), None);
        assert!(derive_freeze_panes(0, usize::from(u16::MAX) + 1).is_err());
    }

    #[test]
    fn test_long_text_error_and_truncate_modes() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let c_seq = "G".repeat(N_LEN_EXCEL_CELL_TEXT_MAX + 1);
        let df = create_frame(&[
            ("construct", vec![Some("C1".to_string())]),
            ("sequence", vec![Some(c_seq)]),
        ]);

        let mut writer = XlsxWriter::with_options(
            tmp.path().join("error.xlsx"),
            derive_default_xlsx_write_options(),
        );
        let err = writer
            .write_sheet_from_dataframes(&df, "construct_sequences", &Default::default())
            .expect_err("overlong text");
        assert!(err.contains("\"sequence\""));

        let write_options = SpecXlsxWriteOptions {
            value_policy: SpecXlsxValuePolicy {
                rule_long_text: EnumLongTextMode::Truncate,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut writer = XlsxWriter::with_options(tmp.path().join("truncate.xlsx"), write_options);
        writer
            .write_sheet_from_dataframes(&df, "construct_sequences", &Default::default())
            .expect("truncate");
        let l_reports = writer.report();
        assert_eq!(l_reports[0].warnings.len(), 1);
        assert!(l_reports[0].warnings[0].starts_with("Truncated text"));
    }
}
