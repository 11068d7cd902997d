use std::path::{Path, PathBuf};

/// One open top-level window as reported by the window source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningWindow {
    pub id: String,
    /// Lowercased last dotted token of the window class.
    pub exec_hint: String,
    pub title: String,
}

impl RunningWindow {
    pub fn new(id: &str, exec_hint: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            exec_hint: exec_hint.to_string(),
            title: title.to_string(),
        }
    }
}

/// An installed `.desktop` file. Only the `Icon=` key is ever read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopDescriptor {
    pub file_path: PathBuf,
}

impl DesktopDescriptor {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

/// Outcome of a lookup that may miss or whose probe may itself fail.
///
/// `Absent` means the probe worked and found nothing. `Fallback` means the
/// probe could not run (missing tool, unreadable file, timeout) and the caller
/// should apply its own default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe<T> {
    Value(T),
    Absent,
    Fallback { reason: String },
}

impl<T> Probe<T> {
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self::Fallback {
            reason: reason.into(),
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Fallback { .. } => None,
        }
    }

    pub fn value_or(self, default: T) -> T {
        self.value().unwrap_or(default)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Probe<U> {
        match self {
            Self::Value(value) => Probe::Value(f(value)),
            Self::Absent => Probe::Absent,
            Self::Fallback { reason } => Probe::Fallback { reason },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Raster,
    Vector,
    Pixmap,
}

/// Icon chosen for a window. `Absent` tells the renderer to draw a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIcon {
    Found(PathBuf),
    Absent,
}

impl ResolvedIcon {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::Absent => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn format(&self) -> Option<IconFormat> {
        let extension = self
            .path()?
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())?;

        Some(match extension.as_str() {
            "svg" => IconFormat::Vector,
            "xpm" => IconFormat::Pixmap,
            _ => IconFormat::Raster,
        })
    }
}

impl From<Option<PathBuf>> for ResolvedIcon {
    fn from(value: Option<PathBuf>) -> Self {
        match value {
            Some(path) => Self::Found(path),
            None => Self::Absent,
        }
    }
}
