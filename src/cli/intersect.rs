use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::DEFAULT_OUTDIR;
use crate::pipeline::bedtools::{IntersectJob, DEFAULT_BEDTOOLS};

/// Default file name of the overlap stream inside the output directory
pub const OVERLAP_FILE: &str = "intersect.gtf";
/// Default file name of the non-overlap stream inside the output directory
pub const NON_OVERLAP_FILE: &str = "nonintersect.gtf";

#[derive(Args)]
pub struct IntersectArgs {
    /// smORF GTF
    #[arg(long, required = true)]
    pub smorf_gtf: PathBuf,

    /// Reference (Ensembl) GTF
    #[arg(long, required = true)]
    pub ensembl_gtf: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUTDIR)]
    pub outdir: PathBuf,

    /// Overlap stream destination [default: OUTDIR/intersect.gtf]
    #[arg(long)]
    pub intersect_output: Option<PathBuf>,

    /// Non-overlap stream destination [default: OUTDIR/nonintersect.gtf]
    #[arg(long)]
    pub non_intersect_output: Option<PathBuf>,

    /// bedtools executable
    #[arg(long, default_value = DEFAULT_BEDTOOLS)]
    pub bedtools: String,
}

/// Execute intersect subcommand
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or bedtools fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IntersectArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.outdir)
        .with_context(|| format!("Failed to create output directory {}", args.outdir.display()))?;

    let job = IntersectJob::new(
        &args.smorf_gtf,
        &args.ensembl_gtf,
        args.intersect_output
            .clone()
            .unwrap_or_else(|| args.outdir.join(OVERLAP_FILE)),
        args.non_intersect_output
            .clone()
            .unwrap_or_else(|| args.outdir.join(NON_OVERLAP_FILE)),
    )
    .with_program(&args.bedtools);

    job.run()?;
    info!("Intersection outputs written to {}", args.outdir.display());
    Ok(())
}
