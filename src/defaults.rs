use std::path::PathBuf;

/// Built-in fallback values for every setting the rc files may override.
///
/// This is a plain value, handed to [`Config::load`](crate::Config::load)
/// by the caller rather than read from a process-wide global. Embedders can
/// tweak a field (a different rc filename, say) before resolving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Where the current version is stored.
    pub version_file: PathBuf,
    /// strftime-style pattern used when rewrite rules substitute dates.
    pub date_format: String,
    /// Version written by `versionner init` when no version file exists yet.
    pub default_init_version: String,
    /// Which semver component `versionner up` bumps: major, minor or patch.
    pub up_part: String,
    /// Name of the rc file looked up in the home and working directories.
    pub rc_filename: String,
    /// Seconds to wait for the VCS when creating a tag.
    pub tag_timeout: u64,
    /// Commit message template; `%s` is replaced with the new version.
    pub vcs_commit_message: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            version_file: PathBuf::from("./VERSION"),
            date_format: "%Y-%m-%d".into(),
            default_init_version: "0.1.0".into(),
            up_part: "minor".into(),
            rc_filename: ".versionner.rc".into(),
            tag_timeout: 5,
            vcs_commit_message: "%s".into(),
        }
    }
}
