//! Candidate rc-file discovery and loading.
//!
//! Two well-known locations are consulted, in priority-ascending order
//! (last = highest, matching the merge convention in [`resolve()`](crate::resolve())):
//!
//! 1. `~/.versionner.rc` in the user's home directory
//! 2. `./.versionner.rc` in the current working directory
//!
//! Both are optional. A missing file is silently skipped; listing a
//! candidate is a suggestion, not a requirement. Only actual I/O errors
//! (permissions, etc.) are propagated.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Candidate rc-file paths, lowest priority first.
///
/// The home directory comes from the platform user-directories lookup; if
/// neither the home nor the working directory can be resolved the list may
/// be shorter than two, which downstream code treats like missing files.
pub(crate) fn candidate_paths(rc_filename: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(user) = directories::UserDirs::new() {
        paths.push(user.home_dir().join(rc_filename));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(rc_filename));
    }
    paths
}

/// Read every candidate that exists, preserving priority order.
pub(crate) fn load_rc_files(paths: &[PathBuf]) -> Result<Vec<(PathBuf, String)>, ConfigError> {
    let mut found = Vec::new();
    for path in paths {
        match std::fs::read_to_string(path) {
            Ok(content) => found.push((path.clone(), content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.clone(),
                    source: e,
                });
            }
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn candidate_paths_end_with_rc_filename() {
        for path in candidate_paths(".versionner.rc") {
            assert!(path.ends_with(".versionner.rc"), "{path:?}");
        }
    }

    #[test]
    fn no_files_exist() {
        let dir = TempDir::new().unwrap();
        let paths = vec![dir.path().join(".versionner.rc")];
        assert!(load_rc_files(&paths).unwrap().is_empty());
    }

    #[test]
    fn one_file_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".versionner.rc");
        fs::write(&path, "[versionner]\nup_part = major\n").unwrap();
        let found = load_rc_files(&[path.clone()]).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, path);
        assert!(found[0].1.contains("major"));
    }

    #[test]
    fn missing_candidate_silently_skipped() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let project_rc = project.path().join(".versionner.rc");
        fs::write(&project_rc, "[vcs]\nengine = git\n").unwrap();

        let paths = vec![home.path().join(".versionner.rc"), project_rc];
        let found = load_rc_files(&paths).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn priority_order_preserved() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let home_rc = home.path().join(".versionner.rc");
        let project_rc = project.path().join(".versionner.rc");
        fs::write(&home_rc, "[versionner]\nup_part = minor\n").unwrap();
        fs::write(&project_rc, "[versionner]\nup_part = major\n").unwrap();

        let found = load_rc_files(&[home_rc.clone(), project_rc.clone()]).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].0, home_rc);
        assert_eq!(found[1].0, project_rc);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_candidate_is_an_io_error() {
        // A directory at the candidate path fails with EISDIR, not NotFound.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".versionner.rc");
        fs::create_dir(&path).unwrap();

        let result = load_rc_files(&[path]);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
