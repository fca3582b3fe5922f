use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal resolution errors. Either the filesystem refused us or an rc file
/// is syntactically broken; both abort the tool before any version-bump
/// work happens.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ini::ParseError,
    },

    #[error("Failed to parse {path}: key/value pair before any section header")]
    MissingSectionHeader { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Recoverable problems with a single `file:` rewrite rule. One of these
/// drops the offending rule and becomes a [`Diagnostic`]; resolution of the
/// remaining configuration continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("file \"{0}\" does not exist")]
    MissingFile(String),

    #[error("search cannot be empty")]
    EmptySearch,

    #[error("replace cannot be empty")]
    EmptyReplace,

    #[error("match must be one of: file, line (got \"{0}\")")]
    InvalidMatchMode(String),

    #[error("unknown encoding \"{0}\"")]
    UnknownEncoding(String),

    #[error("unknown search flag \"{0}\"")]
    UnknownSearchFlag(String),

    #[error("invalid boolean \"{value}\" for key \"{key}\"")]
    InvalidBoolean { key: String, value: String },
}

/// A dropped rewrite rule, reported to the user as a single stderr line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Tracked filename from the `file:` section header.
    pub filename: String,
    pub error: ValidationError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "incorrect configuration for file \"{}\": {}",
            self.filename, self.error
        )
    }
}
