//! # smorf-annotator
//!
//! A library for classifying small open reading frames (smORFs) into
//! functional categories from their overlaps with a reference gene annotation.
//!
//! An external interval tool (`bedtools intersect`) produces two streams: the
//! strand-matched overlaps between smORFs and reference features, and the
//! smORFs with no overlap at all. `smorf-annotator` reads them once, in order,
//! and assigns exactly one category to every smORF.
//!
//! ## Features
//!
//! - **Per-overlap classification**: UTRs, CDS, pseudogenes, decay transcripts,
//!   retained introns and noncoding genes each map to a category
//! - **Conflict resolution**: combined categories for UTR/CDS pairs and a fixed
//!   priority order when a smORF overlaps several features
//! - **Intergenic fill-in**: smORFs without overlap become `Intergenic`
//! - **Summaries**: category counts as text, TSV or JSON
//!
//! ## Example
//!
//! ```rust
//! use smorf_annotator::classification::engine::annotate_streams;
//! use smorf_annotator::CategoryLabel;
//!
//! let overlaps = "chr1\tsrc\tCDS\t100\t200\t.\t+\t0\tgene_id \"S1\";\tchr1\tensembl\tfive_prime_utr\t90\t150\t.\t+\t.\tgene_name \"ACTB\";\t51\n\
//!                 chr1\tsrc\tCDS\t100\t200\t.\t+\t0\tgene_id \"S1\";\tchr1\tensembl\tCDS\t151\t400\t.\t+\t0\tgene_name \"ACTB\";\t50\n";
//! let non_overlaps = "chr2\tsrc\tCDS\t10\t40\t.\t-\t0\tgene_id \"S2\";\n";
//!
//! let run = annotate_streams(overlaps.as_bytes(), non_overlaps.as_bytes()).unwrap();
//! assert_eq!(run.table.category("S1"), CategoryLabel::UpstreamOverlapping);
//! assert_eq!(run.table.category("S2"), CategoryLabel::Intergenic);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Category labels and record types
//! - [`parsing`]: GTF attribute parsing and intersection stream readers
//! - [`classification`]: Classifier, conflict resolver and run engine
//! - [`report`]: Annotation table and category summary output
//! - [`pipeline`]: `bedtools intersect` invocation
//! - [`cli`]: Command-line interface implementation

pub mod classification;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod pipeline;
pub mod report;

// Re-export commonly used types for convenience
pub use crate::classification::engine::{annotate_files, annotate_streams, AnnotationRun};
pub use crate::classification::resolver::{ConflictResolver, GeneCategoryTable};
pub use crate::core::record::{CategoryAssignment, NonOverlapRecord, OverlapRecord};
pub use crate::core::types::*;
pub use crate::report::CategorySummary;
