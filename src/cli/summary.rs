use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::cli::{print_summary, OutputFormat};
use crate::report::{read_table_file, CategorySummary};

#[derive(Args)]
pub struct SummaryArgs {
    /// Annotation table written by `annotate`
    #[arg(required = true)]
    pub table: PathBuf,
}

/// Execute summary subcommand
///
/// # Errors
///
/// Returns an error if the table cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SummaryArgs, format: OutputFormat) -> anyhow::Result<()> {
    let table = read_table_file(&args.table)?;
    if table.is_empty() {
        warn!("No annotation rows found in {}", args.table.display());
    }
    print_summary(&CategorySummary::from_table(&table), format)
}
