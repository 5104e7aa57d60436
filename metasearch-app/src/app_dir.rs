//! Where MetaSearch keeps its files. Everything lives beside the binary, so
//! a copied build carries its engine selections and custom engines along.

use std::path::{Path, PathBuf};

const PREFERENCES_FILE: &str = "preferences.json";

/// Folder holding the running binary, or the working directory when the
/// binary path can't be resolved.
pub(crate) fn app_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The preferences file inside `dir`.
pub(crate) fn preferences_file(dir: &Path) -> PathBuf {
    dir.join(PREFERENCES_FILE)
}

pub(crate) fn preferences_path() -> PathBuf {
    preferences_file(&app_directory())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_sit_beside_the_binary() {
        let dir = app_directory();
        assert!(dir.is_dir(), "{} is not a directory", dir.display());
        assert_eq!(preferences_path(), dir.join("preferences.json"));
    }

    #[test]
    fn preferences_file_joins_name() {
        assert_eq!(
            preferences_file(Path::new("portable")),
            Path::new("portable").join("preferences.json")
        );
    }
}
