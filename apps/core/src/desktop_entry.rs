use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::model::{DesktopDescriptor, Probe};
use crate::theme::DataDirs;

pub const DESKTOP_SUFFIX: &str = ".desktop";
const ICON_KEY: &str = "Icon=";

/// Descriptor directories in lookup order: user-local, system-wide, then the
/// flatpak and snap export directories.
pub fn default_desktop_dirs(data_dirs: &DataDirs) -> Vec<PathBuf> {
    vec![
        data_dirs.user.join("applications"),
        PathBuf::from("/usr/share/applications"),
        PathBuf::from("/var/lib/flatpak/exports/share/applications"),
        PathBuf::from("/var/lib/snapd/desktop/applications"),
    ]
}

/// Lowercased with spaces removed; descriptor file names are keyed the same way.
pub fn match_key(input: &str) -> String {
    input.to_lowercase().replace(' ', "")
}

/// First descriptor whose file name contains the hint's match key.
///
/// Directories are scanned in the given order and each listing is sorted by
/// file name, so the same hint always picks the same file.
pub fn locate(hint: &str, desktop_dirs: &[PathBuf]) -> Option<DesktopDescriptor> {
    let key = match_key(hint);
    if key.is_empty() {
        return None;
    }

    for directory in desktop_dirs {
        let Some(mut names) = list_descriptor_names(directory) else {
            continue;
        };
        names.sort();

        let matched = names
            .into_iter()
            .find(|name| match_key(&name.to_string_lossy()).contains(&key));
        if let Some(name) = matched {
            let descriptor = DesktopDescriptor::new(directory.join(name));
            debug!(
                event = "core.desktop_entry.located",
                hint = hint,
                path = %descriptor.file_path.display()
            );
            return Some(descriptor);
        }
    }

    debug!(event = "core.desktop_entry.not_found", hint = hint);
    None
}

/// Raw file names, so a non-UTF-8 name still joins back into a real path.
fn list_descriptor_names(directory: &Path) -> Option<Vec<OsString>> {
    let entries = fs::read_dir(directory).ok()?;
    let names = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name())
        .filter(|name| name.to_string_lossy().ends_with(DESKTOP_SUFFIX))
        .collect();
    Some(names)
}

/// The descriptor's declared `Icon=` value.
///
/// Undecodable bytes are dropped rather than failing the read. A file that
/// cannot be opened is reported as `Fallback` so callers can tell it apart
/// from a descriptor that simply declares no icon.
pub fn read_icon(descriptor: Option<&DesktopDescriptor>) -> Probe<String> {
    let Some(descriptor) = descriptor else {
        return Probe::Absent;
    };

    let bytes = match fs::read(&descriptor.file_path) {
        Ok(bytes) => bytes,
        Err(error) => {
            warn!(
                event = "core.desktop_entry.read_failed",
                path = %descriptor.file_path.display(),
                error = %error
            );
            return Probe::fallback(error.to_string());
        }
    };

    let text = decode_ignoring_invalid(&bytes);
    let icon = text
        .lines()
        .find_map(|line| line.strip_prefix(ICON_KEY))
        .map(str::trim_end);

    match icon {
        Some(icon) if !icon.is_empty() => {
            debug!(
                event = "core.desktop_entry.icon_declared",
                path = %descriptor.file_path.display(),
                icon = icon
            );
            Probe::Value(icon.to_string())
        }
        _ => Probe::Absent,
    }
}

fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
