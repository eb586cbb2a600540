//! Invocation of the external interval-intersection tool.
//!
//! Overlap computation is not done here: `bedtools intersect` is run twice
//! and its output is written to the two files the classification engine
//! reads.
//!
//! | Stream | Command |
//! |--------|---------|
//! | overlap | `bedtools intersect -wo -s -a SMORFS -b REFERENCE` |
//! | non-overlap | `bedtools intersect -v -s -a SMORFS -b REFERENCE` |

pub mod bedtools;
