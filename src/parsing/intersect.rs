use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::record::{NonOverlapRecord, OverlapRecord, DEFAULT_REFERENCE_FEATURE};
use crate::parsing::attributes::parse_attributes;

/// Lines not starting with this prefix are not data rows
pub const CHROMOSOME_PREFIX: &str = "chr";
/// Only smORF features of this type are classified
pub const ELIGIBLE_FEATURE_TYPE: &str = "CDS";

const QUERY_FEATURE_COLUMN: usize = 2;
const QUERY_ATTRIBUTE_COLUMN: usize = 8;
const REFERENCE_FEATURE_COLUMN: usize = 11;
const REFERENCE_ATTRIBUTE_COLUMN: usize = 17;

/// Which of the two intersection outputs is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Strand-matched overlaps (`bedtools intersect -wo -s`)
    Overlap,
    /// Loci without overlap (`bedtools intersect -v -s`)
    NonOverlap,
}

impl std::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overlap => write!(f, "overlap"),
            Self::NonOverlap => write!(f, "non-overlap"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Failed to open {stream} stream '{}': {source}", .path.display())]
    Open {
        stream: StreamKind,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {stream} stream at line {line}: {source}")]
    Read {
        stream: StreamKind,
        line: usize,
        source: std::io::Error,
    },
}

/// Line accounting for one stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Lines read
    pub lines: usize,
    /// Lines ignored (wrong prefix, too few columns, not a CDS)
    pub skipped: usize,
    /// Records handed to the caller
    pub records: usize,
}

/// Open one of the intersection outputs for buffered reading
///
/// # Errors
///
/// Returns `StreamError::Open` naming the stream if the file cannot be opened.
pub fn open_stream(path: &Path, stream: StreamKind) -> Result<BufReader<File>, StreamError> {
    let file = File::open(path).map_err(|source| StreamError::Open {
        stream,
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened {stream} stream {}", path.display());
    Ok(BufReader::new(file))
}

/// Parse one line of the overlap stream.
///
/// Returns `None` for lines that are not eligible for classification.
#[must_use]
pub fn parse_overlap_line(line: &str) -> Option<OverlapRecord> {
    let fields = split_data_line(line)?;

    if fields.get(QUERY_FEATURE_COLUMN) != Some(&ELIGIBLE_FEATURE_TYPE) {
        return None;
    }
    let query_attribute_text = fields.get(QUERY_ATTRIBUTE_COLUMN)?;

    let reference_feature_type = fields
        .get(REFERENCE_FEATURE_COLUMN)
        .copied()
        .unwrap_or(DEFAULT_REFERENCE_FEATURE);
    let reference_attribute_text = fields
        .get(REFERENCE_ATTRIBUTE_COLUMN)
        .unwrap_or(query_attribute_text);

    Some(OverlapRecord::new(
        fields[QUERY_FEATURE_COLUMN],
        parse_attributes(query_attribute_text),
        reference_feature_type,
        parse_attributes(reference_attribute_text),
    ))
}

/// Parse one line of the non-overlap stream
#[must_use]
pub fn parse_non_overlap_line(line: &str) -> Option<NonOverlapRecord> {
    let fields = split_data_line(line)?;
    let attribute_text = fields.get(QUERY_ATTRIBUTE_COLUMN)?;
    Some(NonOverlapRecord::from_attributes(&parse_attributes(
        attribute_text,
    )))
}

/// Read the overlap stream to the end, handing each eligible record to `visit`
///
/// # Errors
///
/// Returns `StreamError::Read` if a line cannot be read.
pub fn read_overlaps<R: BufRead>(
    reader: R,
    visit: impl FnMut(OverlapRecord),
) -> Result<StreamStats, StreamError> {
    read_stream(reader, StreamKind::Overlap, parse_overlap_line, visit)
}

/// Read the non-overlap stream to the end, handing each record to `visit`
///
/// # Errors
///
/// Returns `StreamError::Read` if a line cannot be read.
pub fn read_non_overlaps<R: BufRead>(
    reader: R,
    visit: impl FnMut(NonOverlapRecord),
) -> Result<StreamStats, StreamError> {
    read_stream(reader, StreamKind::NonOverlap, parse_non_overlap_line, visit)
}

fn read_stream<R, T>(
    reader: R,
    stream: StreamKind,
    parse: impl Fn(&str) -> Option<T>,
    mut visit: impl FnMut(T),
) -> Result<StreamStats, StreamError>
where
    R: BufRead,
{
    let mut stats = StreamStats::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| StreamError::Read {
            stream,
            line: i + 1,
            source,
        })?;
        stats.lines += 1;

        match parse(&line) {
            Some(record) => {
                stats.records += 1;
                visit(record);
            }
            None => stats.skipped += 1,
        }
    }

    debug!(
        "Read {} lines from {stream} stream ({} records, {} skipped)",
        stats.lines, stats.records, stats.skipped
    );
    Ok(stats)
}

/// Split a tab-delimited data row, or `None` if it is not one
fn split_data_line(line: &str) -> Option<Vec<&str>> {
    if !line.starts_with(CHROMOSOME_PREFIX) {
        return None;
    }
    Some(line.trim_end().split('\t').collect())
}
