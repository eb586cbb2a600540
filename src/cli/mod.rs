//! Command-line interface for smorf-annotator.
//!
//! Available commands:
//!
//! - **annotate**: Classify smORFs from intersection outputs (optionally running bedtools first)
//! - **intersect**: Only run the two `bedtools intersect` jobs
//! - **summary**: Print the category summary of an existing annotation table
//!
//! ## Usage
//!
//! ```text
//! # Full run from the two GTFs
//! smorf-annotator annotate --smorf-gtf smorfs.gtf --ensembl-gtf Homo_sapiens.gtf -o out
//!
//! # Classify pre-computed intersection outputs
//! smorf-annotator annotate --intersect-output intersect.gtf --non-intersect-output nonintersect.gtf
//!
//! # JSON summary for scripting
//! smorf-annotator summary out/smORF_annotation.txt --format json
//! ```

use clap::{Parser, Subcommand};

use crate::report::CategorySummary;

pub mod annotate;
pub mod intersect;
pub mod summary;

/// Default output directory
pub const DEFAULT_OUTDIR: &str = "Annotator_output";

#[derive(Parser)]
#[command(name = "smorf-annotator")]
#[command(version)]
#[command(about = "Annotate smORF types from overlaps with a reference annotation")]
#[command(
    long_about = "smorf-annotator classifies small ORFs into functional categories (uORF, dORF, oORF, psORF, lncRNA, ...) from their strand-matched overlaps with a reference GTF.\n\nWhen a smORF overlaps several reference features, combined categories (uoORF, doORF, udORF) and a fixed priority order decide the final category. smORFs without any overlap are reported as Intergenic."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Summary output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify smORFs into functional categories
    Annotate(annotate::AnnotateArgs),

    /// Run bedtools to produce the overlap and non-overlap streams
    Intersect(intersect::IntersectArgs),

    /// Summarize an existing annotation table
    Summary(summary::SummaryArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Print a category summary to stdout in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_summary(summary: &CategorySummary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", summary.to_text()),
        OutputFormat::Json => println!("{}", summary.to_json()?),
        OutputFormat::Tsv => print!("{}", summary.to_tsv()),
    }
    Ok(())
}
