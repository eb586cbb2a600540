//! Parsers for GTF attributes and `bedtools intersect` output.
//!
//! - **Attributes**: the `key "value";` ninth GTF column
//! - **Intersection streams**: the joined overlap output (`-wo`) and the
//!   complement output (`-v`)
//!
//! ## Columns
//!
//! | Column (0-based) | Stream | Content |
//! |------------------|--------|---------|
//! | 0 | both | chromosome, must start with `chr` |
//! | 2 | overlap | smORF feature type, must be `CDS` |
//! | 8 | both | smORF attributes |
//! | 11 | overlap | reference feature type (default `exon`) |
//! | 17 | overlap | reference attributes (default: column 8) |
//!
//! Lines that do not fit this layout are skipped, never reported as errors.
//!
//! ## Example
//!
//! ```rust
//! use smorf_annotator::parsing::attributes::parse_attributes;
//!
//! let attrs = parse_attributes(r#"gene_id "ABC"; gene_name "XYZ"; level 2"#);
//! assert_eq!(attrs["gene_id"], "ABC");
//! assert_eq!(attrs["gene_name"], "XYZ");
//! assert!(!attrs.contains_key("level"));
//! ```

pub mod attributes;
pub mod intersect;
