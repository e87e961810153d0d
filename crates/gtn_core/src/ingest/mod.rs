//! Bulk ingestion of the line-delimited item format.
//!
//! # Responsibility
//! - Parse record lines into items and append them to a [`Catalog`].
//! - Report complete, partial and rejected lines instead of hiding them.
//!
//! # Invariants
//! - Blank lines are skipped and never reported.
//! - A bad line never aborts the load; only read failures do.
//! - Partial records (defaulted fields) are still added to the catalog.

pub mod line;

use crate::catalog::{Catalog, CatalogError};
use crate::model::item::{ItemId, VariantTag};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub use line::{parse_line, ParsedRecord};

pub type IngestResult<T> = Result<T, IngestError>;

/// Line-level parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    EmptyVariant,
    UnknownVariant(String),
    MissingTitle(VariantTag),
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyVariant => write!(f, "record has no variant tag"),
            Self::UnknownVariant(value) => write!(f, "unknown variant tag `{value}`"),
            Self::MissingTitle(tag) => write!(f, "{tag} record has no title"),
        }
    }
}

impl Error for IngestError {}

/// Field that was missing or malformed and received a default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultedField {
    Deadline,
    Priority,
    Interval,
    Tags,
    Password,
    Progress,
}

impl DefaultedField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deadline => "deadline",
            Self::Priority => "priority",
            Self::Interval => "interval",
            Self::Tags => "tags",
            Self::Password => "password",
            Self::Progress => "progress",
        }
    }
}

/// Failures that stop a load entirely.
#[derive(Debug)]
pub enum LoadError {
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    Read {
        line_no: usize,
        source: std::io::Error,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed to open data file `{}`: {source}", path.display())
            }
            Self::Read { line_no, source } => write!(f, "failed to read line {line_no}: {source}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => Some(source),
        }
    }
}

/// Why one line did not make it into the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum LineRejection {
    Parse(IngestError),
    Catalog(CatalogError),
}

impl Display for LineRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

/// Record stored with defaulted fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialRecord {
    /// 1-based line number.
    pub line_no: usize,
    pub item_id: ItemId,
    pub defaulted: Vec<DefaultedField>,
}

/// Line that was not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    /// 1-based line number.
    pub line_no: usize,
    pub reason: LineRejection,
}

/// Outcome summary of one bulk load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    /// Records stored with every field parsed.
    pub complete: usize,
    pub partial: Vec<PartialRecord>,
    pub rejected: Vec<RejectedLine>,
}

impl IngestReport {
    /// Number of items added to the catalog.
    pub fn loaded(&self) -> usize {
        self.complete + self.partial.len()
    }

    /// Whether every non-blank line was stored without defaults.
    pub fn is_clean(&self) -> bool {
        self.partial.is_empty() && self.rejected.is_empty()
    }
}

/// Loads records from `reader` into `catalog`.
pub fn load_reader<R: BufRead>(reader: R, catalog: &mut Catalog) -> Result<IngestReport, LoadError> {
    let mut report = IngestReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| LoadError::Read { line_no, source })?;
        if line.trim().is_empty() {
            continue;
        }

        let record = match parse_line(&line) {
            Ok(record) => record,
            Err(err) => {
                warn!(
                    "event=ingest_line module=ingest status=rejected line={} reason={}",
                    line_no, err
                );
                report.rejected.push(RejectedLine {
                    line_no,
                    reason: LineRejection::Parse(err),
                });
                continue;
            }
        };

        let defaulted = record.defaulted;
        match catalog.add(record.item) {
            Ok(_) if defaulted.is_empty() => report.complete += 1,
            Ok(item_id) => {
                warn!(
                    "event=ingest_line module=ingest status=partial line={} defaulted={}",
                    line_no,
                    defaulted
                        .iter()
                        .map(|field| field.as_str())
                        .collect::<Vec<_>>()
                        .join("|")
                );
                report.partial.push(PartialRecord {
                    line_no,
                    item_id,
                    defaulted,
                });
            }
            Err(err) => {
                warn!(
                    "event=ingest_line module=ingest status=rejected line={} reason={}",
                    line_no, err
                );
                report.rejected.push(RejectedLine {
                    line_no,
                    reason: LineRejection::Catalog(err),
                });
            }
        }
    }

    info!(
        "event=ingest_done module=ingest status=ok complete={} partial={} rejected={}",
        report.complete,
        report.partial.len(),
        report.rejected.len()
    );
    Ok(report)
}

/// Opens `path` and loads its records into `catalog`.
pub fn load_file(path: impl AsRef<Path>, catalog: &mut Catalog) -> Result<IngestReport, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(BufReader::new(file), catalog)
}
