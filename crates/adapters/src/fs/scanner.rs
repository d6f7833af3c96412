use std::path::{Path, PathBuf};

use launchpad_application::ShortcutScanner;
use launchpad_domain::SHORTCUT_EXTENSION;
use tracing::debug;

use super::list_files_with_extension;

#[derive(Debug, Default)]
pub struct WalkdirShortcutScanner;

impl ShortcutScanner for WalkdirShortcutScanner {
    fn list_shortcuts(&self, folder: &Path) -> Vec<PathBuf> {
        if !folder.is_dir() {
            debug!(folder = %folder.display(), "shortcut folder is missing");
            return Vec::new();
        }

        list_files_with_extension(folder, SHORTCUT_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn lists_only_top_level_url_files() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("Celeste.url"), "[InternetShortcut]\n").expect("write");
        fs::write(dir.path().join("Hades.url"), "[InternetShortcut]\n").expect("write");
        fs::write(dir.path().join("readme.txt"), "hi").expect("write");
        fs::write(dir.path().join("Upper.URL"), "").expect("write");
        fs::write(dir.path().join(".hidden.url"), "").expect("write");
        fs::create_dir(dir.path().join("nested")).expect("mkdir");
        fs::write(dir.path().join("nested").join("Deep.url"), "").expect("write");

        let mut found: Vec<String> = WalkdirShortcutScanner
            .list_shortcuts(dir.path())
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect();
        found.sort();

        assert_eq!(found, vec!["Celeste.url", "Hades.url"]);
    }

    #[test]
    fn missing_folder_lists_nothing() {
        let dir = TempDir::new().expect("tempdir");
        let found = WalkdirShortcutScanner.list_shortcuts(&dir.path().join("absent"));
        assert!(found.is_empty());
    }
}
