use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::parsing::intersect::StreamKind;

/// Executable used when none is configured
pub const DEFAULT_BEDTOOLS: &str = "bedtools";

#[derive(Error, Debug)]
pub enum BedtoolsError {
    #[error("Input GTF not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Failed to create {stream} output '{}': {source}", .path.display())]
    CreateOutput {
        stream: StreamKind,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status} while producing the {stream} stream: {stderr}")]
    Failed {
        program: String,
        stream: StreamKind,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// The two strand-aware `bedtools intersect` invocations that feed classification
#[derive(Debug, Clone)]
pub struct IntersectJob {
    /// smORF annotation (query side, `-a`)
    pub smorf_gtf: PathBuf,

    /// Reference annotation (`-b`)
    pub reference_gtf: PathBuf,

    /// Destination of the joined overlap records
    pub overlap_out: PathBuf,

    /// Destination of the smORFs without overlap
    pub non_overlap_out: PathBuf,

    /// bedtools executable
    pub program: String,
}

impl IntersectJob {
    pub fn new(
        smorf_gtf: impl Into<PathBuf>,
        reference_gtf: impl Into<PathBuf>,
        overlap_out: impl Into<PathBuf>,
        non_overlap_out: impl Into<PathBuf>,
    ) -> Self {
        Self {
            smorf_gtf: smorf_gtf.into(),
            reference_gtf: reference_gtf.into(),
            overlap_out: overlap_out.into(),
            non_overlap_out: non_overlap_out.into(),
            program: DEFAULT_BEDTOOLS.to_string(),
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments producing `stream`.
    ///
    /// Overlaps use `-wo` so both sides' columns are written; the complement
    /// uses `-v` and writes only the smORF side. Both are same-strand (`-s`).
    #[must_use]
    pub fn arguments(&self, stream: StreamKind) -> Vec<OsString> {
        let mode = match stream {
            StreamKind::Overlap => "-wo",
            StreamKind::NonOverlap => "-v",
        };
        vec![
            "intersect".into(),
            mode.into(),
            "-s".into(),
            "-a".into(),
            self.smorf_gtf.clone().into_os_string(),
            "-b".into(),
            self.reference_gtf.clone().into_os_string(),
        ]
    }

    #[must_use]
    pub fn output_path(&self, stream: StreamKind) -> &Path {
        match stream {
            StreamKind::Overlap => &self.overlap_out,
            StreamKind::NonOverlap => &self.non_overlap_out,
        }
    }

    /// Produce the overlap stream, then the non-overlap stream
    ///
    /// # Errors
    ///
    /// Returns `BedtoolsError` if an input is missing, an output cannot be
    /// created, bedtools cannot be started, or it exits unsuccessfully.
    pub fn run(&self) -> Result<(), BedtoolsError> {
        for input in [&self.smorf_gtf, &self.reference_gtf] {
            if !input.is_file() {
                return Err(BedtoolsError::MissingInput(input.clone()));
            }
        }

        self.run_stream(StreamKind::Overlap)?;
        self.run_stream(StreamKind::NonOverlap)
    }

    fn run_stream(&self, stream: StreamKind) -> Result<(), BedtoolsError> {
        let path = self.output_path(stream);
        let out = File::create(path).map_err(|source| BedtoolsError::CreateOutput {
            stream,
            path: path.to_path_buf(),
            source,
        })?;

        let args = self.arguments(stream);
        debug!("Running {} {:?}", self.program, args);

        let result = Command::new(&self.program)
            .args(&args)
            .stdout(Stdio::from(out))
            .output()
            .map_err(|source| BedtoolsError::Spawn {
                program: self.program.clone(),
                source,
            })
            .and_then(|output| {
                if output.status.success() {
                    Ok(())
                } else {
                    Err(BedtoolsError::Failed {
                        program: self.program.clone(),
                        stream,
                        status: output.status,
                        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                    })
                }
            });

        // A partial stream must not be picked up later as a finished one
        if let Err(err) = result {
            if let Err(remove_err) = std::fs::remove_file(path) {
                warn!("Could not remove incomplete {}: {remove_err}", path.display());
            }
            return Err(err);
        }

        info!("Wrote {stream} stream to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(dir: &Path) -> IntersectJob {
        IntersectJob::new(
            dir.join("smorfs.gtf"),
            dir.join("ensembl.gtf"),
            dir.join("intersect.gtf"),
            dir.join("nonintersect.gtf"),
        )
    }

    #[test]
    fn test_arguments() {
        let job = job(Path::new("/data"));

        let overlap: Vec<String> = job
            .arguments(StreamKind::Overlap)
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            overlap,
            vec!["intersect", "-wo", "-s", "-a", "/data/smorfs.gtf", "-b", "/data/ensembl.gtf"]
        );

        let non_overlap = job.arguments(StreamKind::NonOverlap);
        assert_eq!(non_overlap[1], "-v");
        assert_eq!(non_overlap[2], "-s");
    }

    #[test]
    fn test_output_paths() {
        let job = job(Path::new("/out"));
        assert_eq!(job.output_path(StreamKind::Overlap), Path::new("/out/intersect.gtf"));
        assert_eq!(
            job.output_path(StreamKind::NonOverlap),
            Path::new("/out/nonintersect.gtf")
        );
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = job(dir.path()).run().unwrap_err();
        assert!(matches!(err, BedtoolsError::MissingInput(p) if p.ends_with("smorfs.gtf")));
    }

    #[test]
    fn test_unknown_program_fails_to_spawn() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("smorfs.gtf"), "").unwrap();
        std::fs::write(dir.path().join("ensembl.gtf"), "").unwrap();

        let err = job(dir.path())
            .with_program("definitely-not-bedtools-xyz")
            .run()
            .unwrap_err();
        assert!(matches!(err, BedtoolsError::Spawn { .. }));
        assert!(!dir.path().join("intersect.gtf").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_run_removes_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("smorfs.gtf"), "").unwrap();
        std::fs::write(dir.path().join("ensembl.gtf"), "").unwrap();
        std::fs::write(dir.path().join("intersect.gtf"), "stale\n").unwrap();

        let err = job(dir.path()).with_program("false").run().unwrap_err();
        assert!(matches!(
            err,
            BedtoolsError::Failed {
                stream: StreamKind::Overlap,
                ..
            }
        ));
        assert!(!dir.path().join("intersect.gtf").exists());
        assert!(!dir.path().join("nonintersect.gtf").exists());
    }
}
