//! Core resolution pipeline: merge rc-file layers over defaults and produce
//! the validated [`Config`].
//!
//! [`resolve`] operates on pre-loaded file contents with no discovery I/O,
//! making the full pipeline testable with synthetic inputs. Steps:
//!
//! 1. Parse each rc file into a [`Layer`] (malformed ini is fatal)
//! 2. Merge layers in priority order (later overrides earlier, key-by-key)
//! 3. Overlay the `[versionner]` and `[vcs]` sections onto the defaults
//! 4. Build one [`FileConfig`] per `file:<path>` section, in discovery order
//! 5. Backfill each rule's unset `date_format` from the resolved global one
//! 6. Validate enabled rules; failures become diagnostics, not errors
//!
//! Per-rule problems never abort resolution: the offending rule is dropped
//! and reported, everything else goes through. Disabled rules are skipped
//! without validation and without a diagnostic.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::defaults::Defaults;
use crate::error::{ConfigError, Diagnostic};
use crate::file_config::FileConfig;
use crate::layer::Layer;
use crate::rcfile;

/// Section-name prefix declaring a per-tracked-file rewrite rule.
const FILE_SECTION_PREFIX: &str = "file:";

/// The resolved configuration. Constructed exactly once per invocation and
/// never mutated afterward; downstream version-bump and VCS logic only
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the current version is stored.
    pub version_file: PathBuf,
    /// strftime-style pattern for date substitution in rewrite rules.
    pub date_format: String,
    /// Version used when initializing a project without a version file.
    pub default_init_version: String,
    /// Which semver component is bumped by default.
    pub up_part: String,
    /// VCS backend identifier.
    pub vcs_engine: String,
    /// Extra arguments passed when creating a VCS tag.
    pub vcs_tag_params: Vec<String>,
    /// Validated, enabled rewrite rules in rc-file discovery order.
    pub files: Vec<FileConfig>,
}

/// A resolved [`Config`] together with the diagnostics for every rewrite
/// rule that was dropped on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: Config,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Write one line per dropped rewrite rule.
    pub fn emit<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for diag in &self.diagnostics {
            writeln!(out, "{diag}")?;
        }
        Ok(())
    }
}

impl Config {
    /// Discover, load, resolve and report in one call.
    ///
    /// Looks for the rc file in the home directory, then the working
    /// directory (later wins). Neither existing is fine: the result is pure
    /// defaults with an empty rule list. Diagnostics for dropped rules go
    /// to stderr; use [`resolve`] directly to capture them instead.
    pub fn load(defaults: Defaults) -> Result<Config, ConfigError> {
        let candidates = rcfile::candidate_paths(&defaults.rc_filename);
        let files = rcfile::load_rc_files(&candidates)?;
        let resolution = resolve(defaults, files)?;
        // Diagnostics are advisory; a closed stderr must not fail resolution.
        let _ = resolution.emit(&mut io::stderr().lock());
        Ok(resolution.config)
    }
}

/// Resolve configuration from pre-loaded rc-file contents.
///
/// `files` holds `(path, content)` pairs in precedence order: first =
/// lowest priority, last = highest. The path is only used in parse-error
/// messages. The only I/O performed here is the tracked-file existence
/// check inside [`FileConfig::validate`].
pub fn resolve(
    defaults: Defaults,
    files: Vec<(PathBuf, String)>,
) -> Result<Resolution, ConfigError> {
    let mut merged = Layer::default();
    for (path, content) in &files {
        merged = merged.merge(Layer::parse(content, path)?);
    }
    Ok(apply(defaults, &merged))
}

/// Overlay a merged layer onto the defaults and collect rewrite rules.
fn apply(defaults: Defaults, merged: &Layer) -> Resolution {
    let mut config = Config {
        version_file: defaults.version_file,
        date_format: defaults.date_format,
        default_init_version: defaults.default_init_version,
        up_part: defaults.up_part,
        vcs_engine: "git".to_string(),
        vcs_tag_params: Vec::new(),
        files: Vec::new(),
    };
    let mut diagnostics = Vec::new();

    if let Some(section) = merged.section("versionner") {
        if let Some(file) = section.get("file") {
            config.version_file = PathBuf::from(file);
        }
        if let Some(date_format) = section.get("date_format") {
            config.date_format = date_format.clone();
        }
        if let Some(up_part) = section.get("up_part") {
            config.up_part = up_part.clone();
        }
        if let Some(version) = section.get("default_init_version") {
            config.default_init_version = version.clone();
        }
    }

    if let Some(section) = merged.section("vcs") {
        if let Some(engine) = section.get("engine") {
            config.vcs_engine = engine.clone();
        }
        if let Some(tag_params) = section.get("tag_params") {
            config.vcs_tag_params = tag_params
                .split('\n')
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    for (name, section) in merged.sections() {
        let Some(filename) = name.strip_prefix(FILE_SECTION_PREFIX) else {
            continue;
        };
        let mut rule = match FileConfig::from_section(filename, section) {
            Ok(rule) => rule,
            Err(error) => {
                diagnostics.push(Diagnostic {
                    filename: filename.to_string(),
                    error,
                });
                continue;
            }
        };
        // an explicitly empty date_format counts as unset
        if rule.date_format.as_deref().is_none_or(|fmt| fmt.is_empty()) {
            rule.date_format = Some(config.date_format.clone());
        }
        if !rule.enabled {
            continue;
        }
        match rule.validate() {
            Ok(()) => config.files.push(rule),
            Err(error) => diagnostics.push(Diagnostic {
                filename: filename.to_string(),
                error,
            }),
        }
    }

    Resolution {
        config,
        diagnostics,
    }
}
