//! Row shaping: planning results -> ordered sheet tables.

use log::warn;
use polars::prelude::{Column, DataFrame, NamedFrom, PolarsResult, Series};

use crate::conf::{
    C_COMPONENT_ID_PLACEHOLDER, C_COMPONENT_ID_SEP, C_SHEET_ASSEMBLY_PLAN,
    C_SHEET_CONSTRUCT_PARTS, C_SHEET_CONSTRUCT_SEQUENCES, C_SHEET_ERRORS,
    C_SHEET_FRAGMENT_EXTENSIONS, C_SHEET_PART_SEQUENCES, C_SHEET_PRIMER_SEQUENCES,
    TUP_COLS_ASSEMBLY_PLAN, TUP_COLS_CONSTRUCT_PARTS, TUP_COLS_CONSTRUCT_SEQUENCES,
    TUP_COLS_ERRORS, TUP_COLS_FRAGMENT_EXTENSIONS, TUP_COLS_PART_SEQUENCES,
    TUP_COLS_PRIMER_SEQUENCES,
};
use crate::model::{
    MapConstructParts, MapConstructQuotes, MapErrors, MapFragmentQuotes, MapSequences, Quote,
    SpecAssemblyReport,
};

/// One sheet worth of rows under a fixed header; column 0 is the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetTable {
    pub sheet_name: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<Option<String>>>,
}

impl SpecSheetTable {
    /// Project rows under the header. Short rows are padded with missing cells.
    pub fn from_rows<I, R>(
        sheet_name: &'static str,
        columns: &'static [&'static str],
        rows: I,
    ) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Option<String>>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut l_row: Vec<Option<String>> = row.into_iter().take(columns.len()).collect();
                l_row.resize(columns.len(), None);
                l_row
            })
            .collect();
        Self {
            sheet_name,
            columns,
            rows,
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Key column values in row order.
    pub fn keys(&self) -> impl Iterator<Item = Option<&str>> {
        self.rows
            .iter()
            .map(|row| row.first().and_then(|cell| cell.as_deref()))
    }

    /// Build a string-typed frame, one column per header entry.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .columns
            .iter()
            .enumerate()
            .map(|(n_idx_col, c_name)| {
                let values: Vec<Option<String>> = self
                    .rows
                    .iter()
                    .map(|row| row.get(n_idx_col).cloned().flatten())
                    .collect();
                Column::from(Series::new((*c_name).into(), values))
            })
            .collect::<Vec<_>>();
        DataFrame::new(columns)
    }
}

////////////////////////////////////////////////////////////////////////////////
// #region ComponentIds

/// Provenance token of one sub-quote.
///
/// Library quotes are named by their catalog part, everything else by its
/// quote id. A library quote without part name falls back to its id; an
/// empty result becomes [`C_COMPONENT_ID_PLACEHOLDER`].
pub fn resolve_component_id(subquote: &Quote) -> String {
    let c_token = if subquote.is_library() {
        subquote
            .metadata
            .part_name
            .as_deref()
            .filter(|c_name| !c_name.is_empty())
            .unwrap_or(subquote.id.as_str())
    } else {
        subquote.id.as_str()
    };

    if c_token.is_empty() {
        warn!(
            "Sub-quote from {:?} ({}) has neither part name nor id; using {C_COMPONENT_ID_PLACEHOLDER:?}.",
            subquote.source.name,
            subquote.source.operation_type.as_str()
        );
        return C_COMPONENT_ID_PLACEHOLDER.to_string();
    }
    c_token.to_string()
}

/// Component tokens of a quote, in assembly-plan order.
pub fn quote_components_ids(quote: &Quote) -> Vec<String> {
    quote.subquotes().map(resolve_component_id).collect()
}

/// Component tokens joined with [`C_COMPONENT_ID_SEP`].
pub fn join_quote_components_ids(quote: &Quote) -> String {
    quote_components_ids(quote).join(C_COMPONENT_ID_SEP)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetTables

pub fn tabulate_construct_parts(construct_parts: &MapConstructParts) -> SpecSheetTable {
    SpecSheetTable::from_rows(
        C_SHEET_CONSTRUCT_PARTS,
        &TUP_COLS_CONSTRUCT_PARTS,
        construct_parts.iter().map(|(construct, parts)| {
            [
                Some(construct.clone()),
                Some(parts.join(C_COMPONENT_ID_SEP)),
            ]
        }),
    )
}

pub fn tabulate_construct_sequences(construct_sequences: &MapSequences) -> SpecSheetTable {
    tabulate_sequences(
        C_SHEET_CONSTRUCT_SEQUENCES,
        &TUP_COLS_CONSTRUCT_SEQUENCES,
        construct_sequences,
        false,
    )
}

/// Primers are always listed by name.
pub fn tabulate_primer_sequences(primer_sequences: &MapSequences) -> SpecSheetTable {
    tabulate_sequences(
        C_SHEET_PRIMER_SEQUENCES,
        &TUP_COLS_PRIMER_SEQUENCES,
        primer_sequences,
        true,
    )
}

/// Parts are always listed by name.
pub fn tabulate_part_sequences(part_sequences: &MapSequences) -> SpecSheetTable {
    tabulate_sequences(
        C_SHEET_PART_SEQUENCES,
        &TUP_COLS_PART_SEQUENCES,
        part_sequences,
        true,
    )
}

pub fn tabulate_fragment_extensions(fragment_quotes: &MapFragmentQuotes) -> SpecSheetTable {
    SpecSheetTable::from_rows(
        C_SHEET_FRAGMENT_EXTENSIONS,
        &TUP_COLS_FRAGMENT_EXTENSIONS,
        fragment_quotes.iter().map(|(fragment_id, quote)| {
            [
                Some(fragment_id.clone()),
                quote.metadata.subject.clone(),
                Some(join_quote_components_ids(quote)),
                Some(quote.sequence.clone()),
            ]
        }),
    )
}

pub fn tabulate_assembly_plan(quotes: &MapConstructQuotes) -> SpecSheetTable {
    SpecSheetTable::from_rows(
        C_SHEET_ASSEMBLY_PLAN,
        &TUP_COLS_ASSEMBLY_PLAN,
        quotes.iter().map(|(construct, quote)| {
            [
                Some(construct.clone()),
                Some(quote.source.name.clone()),
                Some(join_quote_components_ids(quote)),
            ]
        }),
    )
}

pub fn tabulate_errors(errors: &MapErrors) -> SpecSheetTable {
    SpecSheetTable::from_rows(
        C_SHEET_ERRORS,
        &TUP_COLS_ERRORS,
        errors
            .iter()
            .map(|(construct, message)| [Some(construct.clone()), Some(message.clone())]),
    )
}

fn tabulate_sequences(
    sheet_name: &'static str,
    columns: &'static [&'static str],
    sequences: &MapSequences,
    if_sort_by_name: bool,
) -> SpecSheetTable {
    let mut l_items: Vec<(&String, &String)> = sequences.iter().collect();
    if if_sort_by_name {
        l_items.sort_by(|a, b| a.0.cmp(b.0));
    }
    SpecSheetTable::from_rows(
        sheet_name,
        columns,
        l_items
            .into_iter()
            .map(|(name, sequence)| [Some(name.clone()), Some(sequence.clone())]),
    )
}

/// All report tables in workbook order.
#[allow(clippy::too_many_arguments)]
pub fn tabulate_report(
    quotes: &MapConstructQuotes,
    primer_sequences: &MapSequences,
    fragment_quotes: &MapFragmentQuotes,
    errors: &MapErrors,
    part_sequences: &MapSequences,
    construct_parts: &MapConstructParts,
    construct_sequences: &MapSequences,
) -> Vec<SpecSheetTable> {
    vec![
        tabulate_construct_parts(construct_parts),
        tabulate_construct_sequences(construct_sequences),
        tabulate_primer_sequences(primer_sequences),
        tabulate_part_sequences(part_sequences),
        tabulate_fragment_extensions(fragment_quotes),
        tabulate_assembly_plan(quotes),
        tabulate_errors(errors),
    ]
}

impl SpecAssemblyReport {
    /// All report tables in workbook order.
    pub fn tables(&self) -> Vec<SpecSheetTable> {
        tabulate_report(
            &self.quotes,
            &self.primer_sequences,
            &self.fragment_quotes,
            &self.errors,
            &self.part_sequences,
            &self.construct_parts,
            &self.construct_sequences,
        )
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
