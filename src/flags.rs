//! Symbolic regex-flag decoding for `search_flags`.
//!
//! The rc format spells flags as a comma-separated list of names, e.g.
//! `search_flags = IGNORECASE, MULTILINE`. The vocabulary is a closed table:
//! an unrecognized name is a recoverable [`ValidationError`], never a fault,
//! and it drops only the rule that used it.

use bitflags::bitflags;

use crate::error::ValidationError;

bitflags! {
    /// Bitmask of regex flags applied to a rewrite rule's search pattern.
    ///
    /// The bits are this crate's own encoding; the downstream rewrite engine
    /// maps them onto whatever regex backend it uses.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SearchFlags: u32 {
        const IGNORECASE = 1 << 0;
        const MULTILINE = 1 << 1;
        const DOTALL = 1 << 2;
        const UNICODE = 1 << 3;
        const VERBOSE = 1 << 4;
        const ASCII = 1 << 5;
    }
}

impl SearchFlags {
    /// Look up one symbolic name, case-insensitively. Both the long names
    /// and the usual one-letter shorthands are accepted.
    fn flag_from_name(name: &str) -> Option<SearchFlags> {
        let flag = match name.to_ascii_uppercase().as_str() {
            "IGNORECASE" | "I" => SearchFlags::IGNORECASE,
            "MULTILINE" | "M" => SearchFlags::MULTILINE,
            "DOTALL" | "S" => SearchFlags::DOTALL,
            "UNICODE" | "U" => SearchFlags::UNICODE,
            "VERBOSE" | "X" => SearchFlags::VERBOSE,
            "ASCII" | "A" => SearchFlags::ASCII,
            _ => return None,
        };
        Some(flag)
    }

    /// Decode a comma-separated list of flag names into one mask.
    ///
    /// Whitespace around names is ignored and empty items are skipped, so
    /// `"IGNORECASE, MULTILINE"` and `"ignorecase,multiline,"` both decode.
    pub fn parse_list(raw: &str) -> Result<SearchFlags, ValidationError> {
        let mut flags = SearchFlags::empty();
        for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            match SearchFlags::flag_from_name(name) {
                Some(flag) => flags |= flag,
                None => return Err(ValidationError::UnknownSearchFlag(name.to_string())),
            }
        }
        Ok(flags)
    }
}
