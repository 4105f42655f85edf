mod cli;
mod input;

use log::info;

use crate::cli::CliArgs;
use crate::input::{ReportCliError, read_report_json};

fn run(args: &CliArgs) -> Result<(), ReportCliError> {
    let report = read_report_json(&args.input)?;
    info!(
        "Loaded {} construct quote(s), {} fragment(s), {} error(s) from {}.",
        report.quotes.len(),
        report.fragment_quotes.len(),
        report.errors.len(),
        args.input.display()
    );
    dnaweaver_report::write_report_with_options(
        &report,
        Some(&args.output),
        &args.report_options(),
    )?;
    Ok(())
}

fn main() {
    env_logger::init();

    let args = CliArgs::parse_args();
    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    println!("Report written to {}", args.output.display());
}
