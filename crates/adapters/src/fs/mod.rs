mod covers;
mod scanner;

pub use covers::{read_image_dimensions, FsCoverImageSelector};
pub use scanner::WalkdirShortcutScanner;

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Regular, non-hidden files directly inside `folder` whose extension is exactly
/// `extension`, in the order the filesystem lists them.
fn list_files_with_extension(folder: &Path, extension: &str) -> Vec<PathBuf> {
    WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && !is_hidden(entry))
        .filter(|entry| {
            entry.path().extension().and_then(|ext| ext.to_str()) == Some(extension)
        })
        .map(DirEntry::into_path)
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
