use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::classification::classifier::classify;
use crate::classification::resolver::{assign_intergenic, ConflictResolver, GeneCategoryTable};
use crate::parsing::intersect::{
    open_stream, read_non_overlaps, read_overlaps, StreamError, StreamKind, StreamStats,
};

/// Outcome of one classification run
#[derive(Debug, Clone)]
pub struct AnnotationRun {
    /// One entry per locus seen in either stream
    pub table: GeneCategoryTable,

    /// Line accounting for the overlap stream
    pub overlap_stats: StreamStats,

    /// Line accounting for the non-overlap stream
    pub non_overlap_stats: StreamStats,

    /// Loci added as `Intergenic` from the non-overlap stream
    pub intergenic: usize,
}

/// Classify every locus from the two intersection outputs on disk.
///
/// Both files are opened before anything is read, so a missing input fails
/// the run without producing a partial table.
///
/// # Errors
///
/// Returns `StreamError` naming the stream that could not be opened or read.
pub fn annotate_files(
    overlap_path: &Path,
    non_overlap_path: &Path,
) -> Result<AnnotationRun, StreamError> {
    let overlaps = open_stream(overlap_path, StreamKind::Overlap)?;
    let non_overlaps = open_stream(non_overlap_path, StreamKind::NonOverlap)?;
    annotate_streams(overlaps, non_overlaps)
}

/// Classify every locus from two already-open streams.
///
/// The overlap stream is consumed completely (classify, then resolve against
/// the per-locus table) before the non-overlap stream fills in loci that had
/// no overlap at all.
///
/// # Errors
///
/// Returns `StreamError::Read` if either stream fails mid-read.
pub fn annotate_streams<O, N>(overlaps: O, non_overlaps: N) -> Result<AnnotationRun, StreamError>
where
    O: BufRead,
    N: BufRead,
{
    let mut resolver = ConflictResolver::new();
    let overlap_stats = read_overlaps(overlaps, |record| {
        let category = classify(&record);
        resolver.apply(record.gene_id(), record.gene_name(), category);
    })?;

    let mut table = resolver.into_table();
    debug!("{} loci after overlap stream", table.len());

    let mut intergenic = 0;
    let non_overlap_stats = read_non_overlaps(non_overlaps, |record| {
        if assign_intergenic(&mut table, &record.gene_id) {
            intergenic += 1;
        }
    })?;
    debug!("{intergenic} loci added as intergenic");

    Ok(AnnotationRun {
        table,
        overlap_stats,
        non_overlap_stats,
        intergenic,
    })
}
