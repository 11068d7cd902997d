use std::path::PathBuf;

use tracing::trace;
use walkdir::WalkDir;

use crate::theme::IconSearchPath;

/// Recognized image extensions, highest priority first.
pub const ICON_EXTENSIONS: [&str; 7] = ["png", "svg", "xpm", "jpg", "jpeg", "bmp", "gif"];

/// Find `<name>.<ext>` under the search roots.
///
/// Roots are tried strictly in order: a hit anywhere under an earlier root wins
/// over any hit under a later one, whatever the extensions. Within a root,
/// directories are visited top-down sorted by file name and each directory is
/// checked against [`ICON_EXTENSIONS`] in priority order.
pub fn find_icon(name: &str, search_path: &IconSearchPath) -> Option<PathBuf> {
    if name.is_empty() || name.contains('/') {
        return None;
    }

    search_path
        .roots()
        .iter()
        .find_map(|root| find_in_root(name, root))
}

fn find_in_root(name: &str, root: &std::path::Path) -> Option<PathBuf> {
    let directories = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir());

    for directory in directories {
        for ext in ICON_EXTENSIONS {
            let candidate = directory.path().join(format!("{name}.{ext}"));
            if candidate.is_file() {
                trace!(
                    event = "core.icon_search.hit",
                    name = name,
                    path = %candidate.display()
                );
                return Some(candidate);
            }
        }
    }

    None
}
