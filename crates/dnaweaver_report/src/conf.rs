//! Report constants: sheet names, column headers and defaults.

/// Destination used when the caller does not provide one.
pub const C_REPORT_FILE_OUT_DEFAULT: &str = "output.xlsx";

/// Separator between joined part names and component ids.
pub const C_COMPONENT_ID_SEP: &str = " + ";
/// Token emitted for a sub-quote with neither part name nor id.
pub const C_COMPONENT_ID_PLACEHOLDER: &str = "?";

pub const C_SHEET_CONSTRUCT_PARTS: &str = "construct_parts";
pub const C_SHEET_CONSTRUCT_SEQUENCES: &str = "construct_sequences";
pub const C_SHEET_PRIMER_SEQUENCES: &str = "primer_sequences";
pub const C_SHEET_PART_SEQUENCES: &str = "part_sequences";
pub const C_SHEET_FRAGMENT_EXTENSIONS: &str = "fragment_extensions";
pub const C_SHEET_ASSEMBLY_PLAN: &str = "assembly_plan";
pub const C_SHEET_ERRORS: &str = "errors";

/// Sheet names in workbook order.
pub const TUP_REPORT_SHEET_NAMES: [&str; 7] = [
    C_SHEET_CONSTRUCT_PARTS,
    C_SHEET_CONSTRUCT_SEQUENCES,
    C_SHEET_PRIMER_SEQUENCES,
    C_SHEET_PART_SEQUENCES,
    C_SHEET_FRAGMENT_EXTENSIONS,
    C_SHEET_ASSEMBLY_PLAN,
    C_SHEET_ERRORS,
];

pub const TUP_COLS_CONSTRUCT_PARTS: [&str; 2] = ["construct", "parts"];
pub const TUP_COLS_CONSTRUCT_SEQUENCES: [&str; 2] = ["construct", "sequence"];
pub const TUP_COLS_PRIMER_SEQUENCES: [&str; 2] = ["primer", "sequence"];
pub const TUP_COLS_PART_SEQUENCES: [&str; 2] = ["part", "sequence"];
pub const TUP_COLS_FRAGMENT_EXTENSIONS: [&str; 4] =
    ["fragment_id", "part", "primers", "fragment_sequence"];
pub const TUP_COLS_ASSEMBLY_PLAN: [&str; 3] = ["construct", "method", "fragments"];
pub const TUP_COLS_ERRORS: [&str; 2] = ["construct", "error"];
