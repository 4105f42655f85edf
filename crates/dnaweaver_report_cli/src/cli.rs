use std::path::PathBuf;

use clap::Parser;
use dnaweaver_io_xlsx::{EnumAutofitColumnsRule, EnumLongTextMode};
use dnaweaver_report::{C_REPORT_FILE_OUT_DEFAULT, SpecReportOptions};

#[derive(Parser, Debug, Clone)]
#[command(name = "dnaweaver-report")]
#[command(about = "Write a DNA assembly planning result as a multi-sheet XLSX report")]
#[command(version)]
pub struct CliArgs {
    /// Planning result as JSON (quotes, primer_sequences, fragment_quotes, errors,
    /// part_sequences, construct_parts, construct_sequences)
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: PathBuf,

    /// Destination workbook
    #[arg(long, short = 'o', value_name = "PATH", default_value = C_REPORT_FILE_OUT_DEFAULT)]
    pub output: PathBuf,

    /// Write "NA" into cells with no value instead of leaving them blank
    #[arg(long)]
    pub keep_missing_values: bool,

    /// Cut text longer than one Excel cell instead of failing
    #[arg(long)]
    pub truncate_long_text: bool,

    /// Keep default column widths
    #[arg(long)]
    pub no_autofit: bool,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Report options derived from the flags.
    pub fn report_options(&self) -> SpecReportOptions {
        let mut options = SpecReportOptions::default();
        options.write_options.keep_missing_values = self.keep_missing_values;
        if self.truncate_long_text {
            options.write_options.value_policy.rule_long_text = EnumLongTextMode::Truncate;
        }
        if self.no_autofit {
            options.policy_autofit.rule_columns = EnumAutofitColumnsRule::None;
        }
        options
    }
}
