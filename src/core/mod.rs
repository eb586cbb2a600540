//! Core data types for smORF classification.
//!
//! - [`CategoryLabel`]: the closed set of functional categories
//! - [`CATEGORY_PRIORITY_ORDER`]: tie-break order between categories
//! - [`OverlapRecord`] / [`NonOverlapRecord`]: rows of the two intersection streams
//! - [`CategoryAssignment`]: the final `(category, gene_name)` pair for a locus
//!
//! ## Categories
//!
//! | Label | Meaning |
//! |-------|---------|
//! | uORF / dORF / oORF | overlaps a 5' UTR / 3' UTR / reference CDS |
//! | uoORF / doORF / udORF | combination of two of the above |
//! | psORF | pseudogene-associated |
//! | aORF | decay or ambiguous-CDS transcript |
//! | riORF | retained intron |
//! | lncRNA | noncoding gene biotype |
//! | eORF | exon, nothing more specific |
//! | UA | unannotated |
//! | Intergenic | no overlap at all |
//!
//! [`CategoryLabel`]: types::CategoryLabel
//! [`CATEGORY_PRIORITY_ORDER`]: types::CATEGORY_PRIORITY_ORDER
//! [`OverlapRecord`]: record::OverlapRecord
//! [`NonOverlapRecord`]: record::NonOverlapRecord
//! [`CategoryAssignment`]: record::CategoryAssignment

pub mod record;
pub mod types;
