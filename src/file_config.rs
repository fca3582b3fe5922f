//! Per-tracked-file rewrite rules.

use std::path::Path;

use crate::error::ValidationError;
use crate::flags::SearchFlags;
use crate::layer::Section;

/// A validated rewrite rule for one tracked file, built from a `file:<path>`
/// section of the rc file.
///
/// Only rules that are enabled and pass [`validate`](FileConfig::validate)
/// make it into the resolved [`Config::files`](crate::Config); anything else
/// is dropped with a diagnostic during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Path of the file to rewrite, as spelled in the section header.
    pub filename: String,
    pub enabled: bool,
    /// Pattern to look for; plain string or regex depending on `match_mode`.
    pub search: String,
    /// Replacement template.
    pub replace: String,
    /// Date pattern override. `None` until the resolver backfills the
    /// global `date_format`.
    pub date_format: Option<String>,
    /// `"line"` applies the pattern per line, `"file"` to the whole content.
    pub match_mode: String,
    pub search_flags: SearchFlags,
    /// Text encoding used when reading and writing the tracked file.
    pub encoding: String,
}

impl FileConfig {
    /// Build a rule from raw section options, applying defaults: enabled,
    /// per-line matching, utf-8, no flags. A missing `search` or `replace`
    /// becomes empty and is caught later by [`validate`](Self::validate);
    /// an undecodable `enabled` or `search_flags` fails construction here.
    pub(crate) fn from_section(
        filename: &str,
        section: &Section,
    ) -> Result<FileConfig, ValidationError> {
        let enabled = match section.get("enabled") {
            Some(raw) => parse_bool("enabled", raw)?,
            None => true,
        };
        let search_flags = match section.get("search_flags") {
            Some(raw) => SearchFlags::parse_list(raw)?,
            None => SearchFlags::empty(),
        };

        Ok(FileConfig {
            filename: filename.to_string(),
            enabled,
            search: section.get("search").cloned().unwrap_or_default(),
            replace: section.get("replace").cloned().unwrap_or_default(),
            date_format: section.get("date_format").cloned(),
            match_mode: section
                .get("match")
                .cloned()
                .unwrap_or_else(|| "line".to_string()),
            search_flags,
            encoding: section
                .get("encoding")
                .cloned()
                .unwrap_or_else(|| "utf-8".to_string()),
        })
    }

    /// Check the rule against the filesystem and the supported vocabularies.
    /// Pure check: no side effects, nothing is modified.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !Path::new(&self.filename).exists() {
            return Err(ValidationError::MissingFile(self.filename.clone()));
        }
        if self.search.is_empty() {
            return Err(ValidationError::EmptySearch);
        }
        if self.replace.is_empty() {
            return Err(ValidationError::EmptyReplace);
        }
        if self.match_mode != "file" && self.match_mode != "line" {
            return Err(ValidationError::InvalidMatchMode(self.match_mode.clone()));
        }
        if encoding_rs::Encoding::for_label(self.encoding.as_bytes()).is_none() {
            return Err(ValidationError::UnknownEncoding(self.encoding.clone()));
        }
        Ok(())
    }
}

/// Ini boolean vocabulary: 1/yes/true/on and 0/no/false/off, any case.
fn parse_bool(key: &str, raw: &str) -> Result<bool, ValidationError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        _ => Err(ValidationError::InvalidBoolean {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
