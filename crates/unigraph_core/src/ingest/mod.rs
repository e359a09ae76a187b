//! Source ingestion boundary: delimited text, typed records, file loaders.
//!
//! # Responsibility
//! - Own every format-specific detail of the four input sources.
//! - Fail fast when a source cannot be read or does not match its shape.
//!
//! # Invariants
//! - Loader failures are fatal for the whole run; no partial output exists.
//! - Data-quality issues inside a readable source never raise errors here.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod delimited;
pub mod sources;

pub use delimited::{parse_delimited, Record};
pub use sources::{
    load_associations, load_fieldmap, load_flashcards, load_organisations, SourceSet,
};

pub type SourceResult<T> = Result<T, SourceError>;

/// Fatal startup error: a required source is unreadable or shape-invalid.
#[derive(Debug)]
pub enum SourceError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read source `{}`: {source}", path.display())
            }
            Self::Json { path, source } => write!(
                f,
                "source `{}` does not match its expected shape: {source}",
                path.display()
            ),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}
