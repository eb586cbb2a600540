//! smORF classification and conflict resolution.
//!
//! - [`classifier`]: category implied by a single overlap
//! - [`resolver`]: per-locus table and the merge/priority rules
//! - [`engine`]: drives both intersection streams through the two
//!
//! ## Resolution Rules
//!
//! When a locus already has a category and another overlap arrives:
//!
//! 1. `{uORF, oORF}` becomes `uoORF`
//! 2. `{dORF, oORF}` becomes `doORF`
//! 3. `{uORF, dORF}` becomes `udORF`
//! 4. otherwise the incoming category replaces the stored one only if it
//!    comes strictly earlier in [`CATEGORY_PRIORITY_ORDER`]
//!
//! Loci that only appear in the non-overlap stream are `Intergenic`.
//!
//! ## Example
//!
//! ```rust
//! use smorf_annotator::classification::resolver::ConflictResolver;
//! use smorf_annotator::CategoryLabel;
//!
//! let mut resolver = ConflictResolver::new();
//! resolver.apply("SMORF_1", "ACTB", CategoryLabel::Upstream);
//! resolver.apply("SMORF_1", "ACTB", CategoryLabel::Overlapping);
//!
//! let table = resolver.into_table();
//! assert_eq!(table.category("SMORF_1"), CategoryLabel::UpstreamOverlapping);
//! ```
//!
//! [`CATEGORY_PRIORITY_ORDER`]: crate::core::types::CATEGORY_PRIORITY_ORDER

pub mod classifier;
pub mod engine;
pub mod resolver;
