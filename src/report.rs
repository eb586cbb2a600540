//! Serialization of the final per-locus table and its category summary.
//!
//! The annotation table is tab-separated with no header:
//!
//! ```text
//! gene_id<TAB>category<TAB>gene_name
//! ```
//!
//! one row per locus, in the order loci were first seen.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::classification::resolver::GeneCategoryTable;
use crate::core::record::CategoryAssignment;
use crate::core::types::CategoryLabel;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to create '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write one `gene_id\tcategory\tgene_name` row per entry
///
/// # Errors
///
/// Returns `ReportError::Io` if writing fails.
pub fn write_table<W: Write>(table: &GeneCategoryTable, mut writer: W) -> Result<(), ReportError> {
    for (gene_id, assignment) in table.iter() {
        writeln!(
            writer,
            "{gene_id}\t{}\t{}",
            assignment.category, assignment.gene_name
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the table to `path`, replacing any existing file
///
/// # Errors
///
/// Returns `ReportError::Create` if the file cannot be created, or
/// `ReportError::Io` if writing fails.
pub fn write_table_file(table: &GeneCategoryTable, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_table(table, BufWriter::new(file))?;
    debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Read a table previously written by [`write_table`].
///
/// Rows with fewer than three columns or an unknown category are skipped.
///
/// # Errors
///
/// Returns `ReportError::Io` if reading fails.
pub fn read_table<R: BufRead>(reader: R) -> Result<GeneCategoryTable, ReportError> {
    let mut table = GeneCategoryTable::new();

    for line in reader.lines() {
        let line = line?;
        let mut fields = line.splitn(3, '\t');
        let (Some(gene_id), Some(category), Some(gene_name)) =
            (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        let Ok(category) = category.parse::<CategoryLabel>() else {
            debug!("Skipping row with unknown category '{category}'");
            continue;
        };
        table.insert(gene_id, CategoryAssignment::new(category, gene_name));
    }

    Ok(table)
}

/// Read a table file previously written by [`write_table_file`]
///
/// # Errors
///
/// Returns `ReportError::Open` if the file cannot be opened, or
/// `ReportError::Io` if reading fails.
pub fn read_table_file(path: &Path) -> Result<GeneCategoryTable, ReportError> {
    let file = File::open(path).map_err(|source| ReportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(BufReader::new(file))
}

/// Number of loci per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Total number of loci
    pub total: usize,

    /// Counts keyed by label, sorted lexicographically by label text
    pub categories: BTreeMap<&'static str, usize>,
}

impl CategorySummary {
    /// Count the categories of every entry in `table`
    #[must_use]
    pub fn from_table(table: &GeneCategoryTable) -> Self {
        let mut categories = BTreeMap::new();
        for (_, assignment) in table.iter() {
            *categories.entry(assignment.category.as_str()).or_insert(0) += 1;
        }
        Self {
            total: table.len(),
            categories,
        }
    }

    #[must_use]
    pub fn count(&self, category: CategoryLabel) -> usize {
        self.categories.get(category.as_str()).copied().unwrap_or(0)
    }

    /// Aligned `label : count` lines for the console
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::from("Annotation summary:\n");
        for (label, count) in &self.categories {
            out.push_str(&format!("  {label:12} : {count}\n"));
        }
        out
    }

    /// `category\tcount` with a header row
    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut out = String::from("category\tcount\n");
        for (label, count) in &self.categories {
            out.push_str(&format!("{label}\t{count}\n"));
        }
        out
    }

    /// Pretty-printed JSON object
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
