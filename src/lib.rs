//! Layered rc-file configuration resolution for versionner, a command-line
//! version-bumping tool.
//!
//! This crate is the tool's configuration engine. It locates the rc files,
//! merges them over built-in defaults, discovers per-tracked-file rewrite
//! rules declared as dynamically named sections, and produces one validated
//! [`Config`] that the rest of the tool (version bumping, VCS tagging, file
//! rewriting) only reads.
//!
//! ```ignore
//! let config = Config::load(Defaults::default())?;
//! for rule in &config.files {
//!     rewrite(rule)?;
//! }
//! ```
//!
//! # Layer precedence
//!
//! ```text
//! Compiled defaults     Defaults::default()
//!        ↑ overridden by
//! ~/.versionner.rc      user-level settings
//!        ↑ overridden by
//! ./.versionner.rc      project-local settings
//! ```
//!
//! Every layer is sparse: an rc file only names the keys it wants to
//! override, and unset keys fall through to the layer below. Both rc files
//! are optional; with neither present the result is pure defaults and an
//! empty rule list, which is not an error.
//!
//! # The rc format
//!
//! Plain ini text with no value interpolation. Two fixed sections carry
//! global settings:
//!
//! ```ini
//! [versionner]
//! file = ./VERSION
//! date_format = %Y-%m-%d
//! up_part = minor
//! default_init_version = 0.1.0
//!
//! [vcs]
//! engine = git
//! tag_params = --sign
//!     --local-user=3B187D13
//! ```
//!
//! A value continues across indented follow-up lines, so list-valued keys
//! like `tag_params` hold one item per line. A key before the first
//! section header is a fatal parse error.
//!
//! Any section named `file:<path>` declares a rewrite rule for one tracked
//! file. Recognized keys: `enabled`, `search`, `replace`, `date_format`,
//! `match` (`file` or `line`), `search_flags` (comma-separated symbolic
//! names such as `IGNORECASE, MULTILINE`), `encoding`.
//!
//! ```ini
//! [file:setup.py]
//! search = version='(.*)'
//! replace = version='%(version)s'
//! search_flags = IGNORECASE
//! ```
//!
//! When both rc files define the same section, it is merged key-by-key with
//! the project file winning; a `file:` section is never replaced wholesale.
//!
//! # Fail-soft validation
//!
//! A broken rewrite rule (tracked file missing, empty `search` or
//! `replace`, unknown `match` mode, unknown `encoding`, unrecognized flag
//! name) never aborts resolution. The rule is dropped, a one-line
//! [`Diagnostic`] is reported, and every other rule goes through. Only two
//! conditions are fatal: an unreadable candidate file and malformed ini
//! syntax, both surfaced as [`ConfigError`].
//!
//! [`Config::load`] is the all-in-one entry point (discovery, resolution,
//! diagnostics to stderr). [`resolve`] takes pre-loaded file contents and
//! returns the diagnostics alongside the config, for callers and tests
//! that want to control both ends.

pub mod defaults;
pub mod error;

mod file_config;
mod flags;
mod layer;
mod rcfile;
mod resolve;

pub use defaults::Defaults;
pub use error::{ConfigError, Diagnostic, ValidationError};
pub use file_config::FileConfig;
pub use flags::SearchFlags;
pub use resolve::{Config, Resolution, resolve};
