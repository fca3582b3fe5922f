//! Ini layers and the overlay merge.
//!
//! Each candidate rc file parses into its own [`Layer`]: an ordered map of
//! section name to ordered key/value entries. Layers are then merged in
//! priority order, later overrides earlier, key-by-key. Keeping the parse
//! and the merge as two explicit steps means precedence never depends on
//! parser-internal accumulation state.
//!
//! Ordering matters downstream: `file:` sections become rewrite rules in
//! discovery order, so both maps preserve insertion order. A key overridden
//! by a later layer keeps its original position; new sections and keys are
//! appended.

use std::path::Path;

use indexmap::IndexMap;
use ini::{Ini, ParseOption};

use crate::error::ConfigError;

/// Key/value entries of one section, in declaration order.
pub(crate) type Section = IndexMap<String, String>;

/// One parsed rc file (or the merged result of several).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Layer {
    sections: IndexMap<String, Section>,
}

impl Layer {
    /// Parse ini text into a layer.
    ///
    /// Values are taken verbatim: no interpolation, no quote stripping, no
    /// escape processing. Rewrite rules carry regex patterns, and `\d` must
    /// survive the trip. A value continues across indented follow-up lines,
    /// re-joined with newlines, so list-valued keys like `tag_params` can
    /// hold one item per line. Duplicate sections within one file merge
    /// key-by-key. A key before any section header is a fatal parse error.
    pub fn parse(content: &str, path: &Path) -> Result<Layer, ConfigError> {
        let (stripped, continuations) = split_continuations(content);
        let opts = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(&stripped, opts).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut sections: IndexMap<String, Section> = IndexMap::new();
        for (name, props) in ini.iter() {
            let Some(name) = name else {
                if props.iter().next().is_some() {
                    return Err(ConfigError::MissingSectionHeader {
                        path: path.to_path_buf(),
                    });
                }
                continue;
            };
            let entries = sections.entry(name.to_string()).or_default();
            for (key, value) in props.iter() {
                entries.insert(key.to_string(), value.to_string());
            }
        }

        for (section, key, line) in continuations {
            if let Some(value) = sections
                .get_mut(&section)
                .and_then(|entries| entries.get_mut(&key))
            {
                value.push('\n');
                value.push_str(&line);
            }
        }
        Ok(Layer { sections })
    }

    /// Overlay `overlay` on top of `self`, section-wise and key-by-key.
    /// Overlay values win; a section present in both is merged, never
    /// replaced wholesale.
    pub fn merge(mut self, overlay: Layer) -> Layer {
        for (name, entries) in overlay.sections {
            self.sections.entry(name).or_default().extend(entries);
        }
        self
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// All sections in discovery order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }

    /// Build a layer entry directly, bypassing the parser. Lets tests cover
    /// values regardless of how the ini syntax spells them.
    #[cfg(test)]
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }
}

/// Pull continuation lines out of the raw text before the ini parser sees
/// it.
///
/// A non-blank line starting with whitespace continues the value of the
/// most recently seen key; each such line is stripped and recorded as
/// `(section, key, line)`, then re-joined with a newline after parsing.
/// Blank lines neither continue nor end a value. Indented comment lines
/// are left for the parser to discard. Section names and keys are trimmed
/// the same way the parser trims them, so the records line up with the
/// parsed entries.
fn split_continuations(content: &str) -> (String, Vec<(String, String, String)>) {
    let mut stripped = String::with_capacity(content.len());
    let mut continuations = Vec::new();
    let mut section = String::new();
    let mut last_key: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        let indented = line.starts_with([' ', '\t']);

        if indented && !trimmed.is_empty() && !trimmed.starts_with([';', '#'])
            && let Some(key) = &last_key
        {
            continuations.push((section.clone(), key.clone(), trimmed.to_string()));
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            section = rest.split(']').next().unwrap_or_default().trim().to_string();
            last_key = None;
        } else if !trimmed.is_empty()
            && !trimmed.starts_with([';', '#'])
            && let Some((key, _)) = trimmed.split_once('=')
        {
            last_key = Some(key.trim().to_string());
        }

        stripped.push_str(line);
        stripped.push('\n');
    }
    (stripped, continuations)
}
