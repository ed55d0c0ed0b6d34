//! Report directory persistence: write/read/verify a solve run on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   solve_report.json   -- canonical JSON, SolveReportV1
//!   search_graph.json   -- canonical JSON, SearchGraphV1
//!   report_digest.txt   -- ASCII digest of solve_report.json ("sha256:...")
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed semantics
//!
//! - Missing file → error
//! - Extra file → error
//! - Non-canonical JSON → error
//! - Report digest mismatch → error
//! - Graph digest differs from the one recorded in the report → error

use std::collections::BTreeSet;
use std::path::Path;

use cubestar_kernel::proof::canon::canonical_json_bytes;
use cubestar_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_SEARCH_GRAPH, DOMAIN_SOLVE_REPORT,
};

use crate::runner::{SolveRunV1, SOLVE_REPORT_SCHEMA};

const REPORT_FILENAME: &str = "solve_report.json";
const GRAPH_FILENAME: &str = "search_graph.json";
const DIGEST_FILENAME: &str = "report_digest.txt";

const ALL_FILENAMES: &[&str] = &[REPORT_FILENAME, GRAPH_FILENAME, DIGEST_FILENAME];

/// Error writing, reading or verifying a report directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDirError {
    /// I/O error.
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// A file outside the fixed layout exists in the directory.
    ExtraFile { name: String },
    /// A JSON file failed to parse.
    ParseError { filename: String, detail: String },
    /// A JSON file is valid but not in canonical form.
    NonCanonical { filename: String },
    /// `schema_version` is not recognized.
    SchemaMismatch { found: String },
    /// `report_digest.txt` doesn't match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
    /// `search_graph.json` doesn't hash to the report's `search_graph_digest`.
    GraphDigestMismatch { declared: String, recomputed: String },
    /// Canonical JSON serialization failed.
    CanonError { detail: String },
}

impl std::fmt::Display for ReportDirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ExtraFile { name } => write!(f, "undeclared extra file: {name}"),
            Self::ParseError { filename, detail } => {
                write!(f, "{filename}: parse error: {detail}")
            }
            Self::NonCanonical { filename } => write!(f, "{filename}: not canonical JSON"),
            Self::SchemaMismatch { found } => write!(f, "report schema mismatch: {found}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(
                    f,
                    "digest mismatch: stored={stored}, recomputed={recomputed}"
                )
            }
            Self::GraphDigestMismatch {
                declared,
                recomputed,
            } => write!(
                f,
                "search graph digest mismatch: declared={declared}, recomputed={recomputed}"
            ),
            Self::CanonError { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for ReportDirError {}

/// A report directory read back from disk and verified.
#[derive(Debug, Clone)]
pub struct ReportDirContentsV1 {
    pub report: serde_json::Value,
    pub graph: serde_json::Value,
    pub digest: ContentHash,
}

/// Write `run` to `dir`. Creates the directory if needed.
///
/// Returns the report digest written to `report_digest.txt`.
///
/// # Errors
///
/// Returns [`ReportDirError`] on I/O failure or canonical JSON error.
pub fn write_report_dir(run: &SolveRunV1, dir: &Path) -> Result<ContentHash, ReportDirError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;

    let report_bytes = run
        .report
        .to_canonical_json_bytes()
        .map_err(|e| ReportDirError::CanonError {
            detail: e.to_string(),
        })?;
    let graph_bytes = run
        .graph
        .to_canonical_json_bytes()
        .map_err(|e| ReportDirError::CanonError {
            detail: e.to_string(),
        })?;
    let digest = canonical_hash(DOMAIN_SOLVE_REPORT, &report_bytes);

    write_atomic(dir.join(GRAPH_FILENAME), &graph_bytes)?;
    write_atomic(dir.join(REPORT_FILENAME), &report_bytes)?;
    write_atomic(dir.join(DIGEST_FILENAME), digest.as_str().as_bytes())?;

    Ok(digest)
}

/// Read and verify a report directory.
///
/// # Errors
///
/// Returns [`ReportDirError`] on any validation failure.
pub fn read_report_dir(dir: &Path) -> Result<ReportDirContentsV1, ReportDirError> {
    let report_bytes = read_required(dir, REPORT_FILENAME)?;
    let graph_bytes = read_required(dir, GRAPH_FILENAME)?;
    let digest_bytes = read_required(dir, DIGEST_FILENAME)?;

    let on_disk = list_files(dir)?;
    for name in &on_disk {
        if !ALL_FILENAMES.contains(&name.as_str()) {
            return Err(ReportDirError::ExtraFile { name: name.clone() });
        }
    }

    let report = parse_canonical(REPORT_FILENAME, &report_bytes)?;
    let graph = parse_canonical(GRAPH_FILENAME, &graph_bytes)?;

    let schema = report["schema_version"].as_str().unwrap_or("");
    if schema != SOLVE_REPORT_SCHEMA {
        return Err(ReportDirError::SchemaMismatch {
            found: schema.to_string(),
        });
    }

    let stored = parse_digest(&digest_bytes)?;
    let digest = canonical_hash(DOMAIN_SOLVE_REPORT, &report_bytes);
    if stored != digest {
        return Err(ReportDirError::DigestMismatch {
            stored: stored.as_str().to_string(),
            recomputed: digest.as_str().to_string(),
        });
    }

    let declared = report["search_graph_digest"].as_str().unwrap_or("");
    let graph_digest = canonical_hash(DOMAIN_SEARCH_GRAPH, &graph_bytes);
    if declared != graph_digest.as_str() {
        return Err(ReportDirError::GraphDigestMismatch {
            declared: declared.to_string(),
            recomputed: graph_digest.as_str().to_string(),
        });
    }

    Ok(ReportDirContentsV1 {
        report,
        graph,
        digest,
    })
}

/// Parse `report_digest.txt`: a single `sha256:<hex>` line, no padding.
fn parse_digest(bytes: &[u8]) -> Result<ContentHash, ReportDirError> {
    let malformed = |detail: String| ReportDirError::ParseError {
        filename: DIGEST_FILENAME.into(),
        detail,
    };
    let text = std::str::from_utf8(bytes).map_err(|e| malformed(e.to_string()))?;
    let hash =
        ContentHash::parse(text).ok_or_else(|| malformed(format!("not a content hash: {text:?}")))?;
    if hash.algorithm() != "sha256" {
        return Err(malformed(format!("unsupported algorithm: {}", hash.algorithm())));
    }
    Ok(hash)
}

/// Verify a report directory, returning its digest.
///
/// # Errors
///
/// Returns [`ReportDirError`] on any validation failure.
pub fn verify_report_dir(dir: &Path) -> Result<ContentHash, ReportDirError> {
    read_report_dir(dir).map(|contents| contents.digest)
}

fn parse_canonical(filename: &str, bytes: &[u8]) -> Result<serde_json::Value, ReportDirError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| ReportDirError::ParseError {
            filename: filename.to_string(),
            detail: e.to_string(),
        })?;
    let recanonical = canonical_json_bytes(&value).map_err(|e| ReportDirError::CanonError {
        detail: e.to_string(),
    })?;
    if recanonical != bytes {
        return Err(ReportDirError::NonCanonical {
            filename: filename.to_string(),
        });
    }
    Ok(value)
}

fn write_atomic(path: impl AsRef<Path>, content: &[u8]) -> Result<(), ReportDirError> {
    let path = path.as_ref();
    let dir = path.parent().ok_or_else(|| ReportDirError::Io {
        detail: "no parent directory".into(),
    })?;

    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);

    std::fs::write(&temp_path, content).map_err(|e| ReportDirError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;

    std::fs::rename(&temp_path, path).map_err(|e| ReportDirError::Io {
        detail: format!("rename {} → {}: {e}", temp_path.display(), path.display()),
    })?;

    Ok(())
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirError::MissingFile {
        filename: filename.to_string(),
    })
}

/// Regular files in `dir`, excluding leftover temp files from `write_atomic`.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirError> {
    let mut files = BTreeSet::new();
    let entries = std::fs::read_dir(dir).map_err(|e| ReportDirError::Io {
        detail: format!("read_dir: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ReportDirError::Io {
            detail: format!("dir entry: {e}"),
        })?;
        let file_type = entry.file_type().map_err(|e| ReportDirError::Io {
            detail: format!("file_type: {e}"),
        })?;
        if file_type.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with(".tmp_") {
                    files.insert(name.to_string());
                }
            }
        }
    }

    Ok(files)
}
