use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::{debug, info};

use crate::classification::engine::annotate_files;
use crate::cli::intersect::{NON_OVERLAP_FILE, OVERLAP_FILE};
use crate::cli::{print_summary, OutputFormat, DEFAULT_OUTDIR};
use crate::pipeline::bedtools::{IntersectJob, DEFAULT_BEDTOOLS};
use crate::report::{write_table_file, CategorySummary};

/// Default file name of the annotation table inside the output directory
pub const ANNOTATION_FILE: &str = "smORF_annotation.txt";

#[derive(Args)]
pub struct AnnotateArgs {
    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUTDIR)]
    pub outdir: PathBuf,

    /// smORF GTF; when given with --ensembl-gtf, bedtools is run first
    #[arg(long, requires = "ensembl_gtf")]
    pub smorf_gtf: Option<PathBuf>,

    /// Reference (Ensembl) GTF
    #[arg(long, requires = "smorf_gtf")]
    pub ensembl_gtf: Option<PathBuf>,

    /// Overlap stream [default: OUTDIR/intersect.gtf]
    #[arg(long)]
    pub intersect_output: Option<PathBuf>,

    /// Non-overlap stream [default: OUTDIR/nonintersect.gtf]
    #[arg(long)]
    pub non_intersect_output: Option<PathBuf>,

    /// Annotation table [default: OUTDIR/smORF_annotation.txt]
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// bedtools executable
    #[arg(long, default_value = DEFAULT_BEDTOOLS)]
    pub bedtools: String,
}

/// Resolved file locations for one annotation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateConfig {
    pub outdir: PathBuf,
    pub overlap_path: PathBuf,
    pub non_overlap_path: PathBuf,
    pub output_path: PathBuf,
}

impl AnnotateConfig {
    /// All files at their default names inside `outdir`
    pub fn in_dir(outdir: impl Into<PathBuf>) -> Self {
        let outdir = outdir.into();
        Self {
            overlap_path: outdir.join(OVERLAP_FILE),
            non_overlap_path: outdir.join(NON_OVERLAP_FILE),
            output_path: outdir.join(ANNOTATION_FILE),
            outdir,
        }
    }

    /// Defaults from `--outdir`, overridden by any explicit path
    #[must_use]
    pub fn from_args(args: &AnnotateArgs) -> Self {
        let defaults = Self::in_dir(&args.outdir);
        Self {
            overlap_path: args
                .intersect_output
                .clone()
                .unwrap_or(defaults.overlap_path),
            non_overlap_path: args
                .non_intersect_output
                .clone()
                .unwrap_or(defaults.non_overlap_path),
            output_path: args.output_file.clone().unwrap_or(defaults.output_path),
            outdir: defaults.outdir,
        }
    }
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_OUTDIR)
    }
}

/// Execute annotate subcommand
///
/// # Errors
///
/// Returns an error if bedtools fails, either intersection output cannot be
/// read, or the annotation table cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnnotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = AnnotateConfig::from_args(&args);
    debug!("{config:?}");

    std::fs::create_dir_all(&config.outdir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.outdir.display()
        )
    })?;

    if let (Some(smorf_gtf), Some(ensembl_gtf)) = (&args.smorf_gtf, &args.ensembl_gtf) {
        IntersectJob::new(
            smorf_gtf,
            ensembl_gtf,
            &config.overlap_path,
            &config.non_overlap_path,
        )
        .with_program(&args.bedtools)
        .run()?;
    }

    let run = annotate_files(&config.overlap_path, &config.non_overlap_path).context(
        "Cannot classify without both intersection outputs; \
         pass --smorf-gtf and --ensembl-gtf to generate them",
    )?;

    if verbose {
        eprintln!(
            "Overlap stream: {} lines, {} classified, {} skipped",
            run.overlap_stats.lines, run.overlap_stats.records, run.overlap_stats.skipped
        );
        eprintln!(
            "Non-overlap stream: {} lines, {} intergenic loci",
            run.non_overlap_stats.lines, run.intergenic
        );
    }

    write_table_file(&run.table, &config.output_path)?;
    info!(
        "Output written to {} ({} loci)",
        config.output_path.display(),
        run.table.len()
    );

    let summary = CategorySummary::from_table(&run.table);
    log_summary(&summary);
    print_summary(&summary, format)
}

fn log_summary(summary: &CategorySummary) {
    let counts: Vec<String> = summary
        .categories
        .iter()
        .map(|(label, count)| format!("{label}={count}"))
        .collect();
    info!("{} loci: {}", summary.total, counts.join(", "));
}
