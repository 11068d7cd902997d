use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::model::Probe;
use crate::process::run_with_timeout;

pub const DEFAULT_THEME: &str = "hicolor";
pub const DEFAULT_PIXMAPS_DIR: &str = "/usr/share/pixmaps";
const DEFAULT_SYSTEM_DATA_DIRS: &str = "/usr/local/share:/usr/share";

/// Source of the active icon theme name.
pub trait ThemeQuery: Send + Sync {
    fn query(&self) -> Probe<String>;
}

/// Reads the theme from the XFCE settings daemon.
pub struct XfconfThemeQuery {
    timeout: Duration,
}

impl XfconfThemeQuery {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl ThemeQuery for XfconfThemeQuery {
    fn query(&self) -> Probe<String> {
        match run_with_timeout(
            "xfconf-query",
            &["-c", "xsettings", "-p", "/Net/IconThemeName"],
            self.timeout,
        ) {
            Ok(output) => theme_from_output(&output),
            Err(error) => Probe::fallback(error.to_string()),
        }
    }
}

/// A theme name known up front, e.g. from the `icon_theme` config override.
pub struct FixedThemeQuery {
    name: String,
}

impl FixedThemeQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ThemeQuery for FixedThemeQuery {
    fn query(&self) -> Probe<String> {
        theme_from_output(&self.name)
    }
}

fn theme_from_output(output: &str) -> Probe<String> {
    let name = output.trim();
    if name.is_empty() || name.contains(|c: char| c == '/' || c == '\n') {
        return Probe::Absent;
    }
    Probe::Value(name.to_string())
}

/// Active theme name, or [`DEFAULT_THEME`] when the query misses or fails.
pub fn current_theme(query: &dyn ThemeQuery) -> String {
    match query.query() {
        Probe::Value(name) => {
            info!(event = "core.theme.query_completed", theme = %name);
            name
        }
        Probe::Absent => {
            info!(
                event = "core.theme.query_empty",
                fallback = DEFAULT_THEME
            );
            DEFAULT_THEME.to_string()
        }
        Probe::Fallback { reason } => {
            warn!(
                event = "core.theme.query_failed",
                reason = %reason,
                fallback = DEFAULT_THEME
            );
            DEFAULT_THEME.to_string()
        }
    }
}

/// The user data root followed by the system data roots, in lookup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirs {
    pub user: PathBuf,
    pub system: Vec<PathBuf>,
}

impl DataDirs {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var_os("XDG_DATA_HOME"),
            std::env::var_os("XDG_DATA_DIRS"),
            dirs::home_dir(),
        )
    }

    /// Unset or empty variables fall back to the XDG base directory defaults.
    pub fn from_values(
        data_home: Option<OsString>,
        data_dirs: Option<OsString>,
        home: Option<PathBuf>,
    ) -> Self {
        let user = data_home
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                home.unwrap_or_else(|| PathBuf::from("/"))
                    .join(".local")
                    .join("share")
            });

        let raw_system = data_dirs
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_SYSTEM_DATA_DIRS.to_string());
        let system = raw_system
            .split(':')
            .filter(|segment| !segment.is_empty())
            .map(PathBuf::from)
            .collect();

        Self { user, system }
    }

    pub fn roots(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.user.as_path()).chain(self.system.iter().map(PathBuf::as_path))
    }
}

/// Ordered, existing icon directory roots: theme dirs, then hicolor, then pixmaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSearchPath {
    roots: Vec<PathBuf>,
}

impl IconSearchPath {
    pub fn from_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    fn push_existing(&mut self, candidate: PathBuf) {
        if candidate.is_dir() && !self.roots.contains(&candidate) {
            self.roots.push(candidate);
        }
    }
}

pub fn expand_search_paths(theme: &str, data_dirs: &DataDirs, pixmaps_dir: &Path) -> IconSearchPath {
    let mut paths = IconSearchPath::default();

    for root in data_dirs.roots() {
        paths.push_existing(root.join("icons").join(theme));
    }
    for root in data_dirs.roots() {
        paths.push_existing(root.join("icons").join(DEFAULT_THEME));
    }
    paths.push_existing(pixmaps_dir.to_path_buf());

    debug!(
        event = "core.theme.search_paths_expanded",
        theme = theme,
        roots = ?paths.roots()
    );
    paths
}
