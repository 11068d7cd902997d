use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::{validate, Config, ConfigError};
use crate::desktop_entry::default_desktop_dirs;
use crate::layout::{place_tiles, TilePlacement, TileSize};
use crate::model::{Probe, ResolvedIcon, RunningWindow};
use crate::resolver::IconResolver;
use crate::theme::{
    current_theme, expand_search_paths, DataDirs, FixedThemeQuery, IconSearchPath, ThemeQuery,
    XfconfThemeQuery,
};
use crate::windows::{FocusRequester, WindowSource, WmctrlFocus, WmctrlWindowSource};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// One launcher tile: the window, its icon, and where the grid puts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewEntry {
    pub window: RunningWindow,
    pub icon: ResolvedIcon,
    pub placement: TilePlacement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub theme: String,
    pub entries: Vec<OverviewEntry>,
}

pub struct CoreService {
    config: Config,
    data_dirs: DataDirs,
    windows: Box<dyn WindowSource>,
    theme: Box<dyn ThemeQuery>,
    focus: Box<dyn FocusRequester>,
}

impl CoreService {
    /// Service wired to the real desktop: wmctrl and xfconf, XDG dirs from the environment.
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        validate(&config)?;
        let timeout = config.command_timeout();
        let theme: Box<dyn ThemeQuery> = match &config.icon_theme {
            Some(name) => Box::new(FixedThemeQuery::new(name.clone())),
            None => Box::new(XfconfThemeQuery::new(timeout)),
        };

        Ok(Self {
            config,
            data_dirs: DataDirs::from_env(),
            windows: Box::new(WmctrlWindowSource::new(timeout)),
            theme,
            focus: Box::new(WmctrlFocus::new(timeout)),
        })
    }

    pub fn with_collaborators(
        config: Config,
        data_dirs: DataDirs,
        windows: Box<dyn WindowSource>,
        theme: Box<dyn ThemeQuery>,
        focus: Box<dyn FocusRequester>,
    ) -> Result<Self, ServiceError> {
        validate(&config)?;
        Ok(Self {
            config,
            data_dirs,
            windows,
            theme,
            focus,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn desktop_dirs(&self) -> Vec<PathBuf> {
        self.config
            .desktop_dirs
            .clone()
            .unwrap_or_else(|| default_desktop_dirs(&self.data_dirs))
    }

    /// Active theme and the icon roots derived from it.
    pub fn search_paths(&self) -> (String, IconSearchPath) {
        let theme = current_theme(self.theme.as_ref());
        let paths = expand_search_paths(&theme, &self.data_dirs, &self.config.pixmaps_dir);
        (theme, paths)
    }

    fn resolver(&self) -> (String, IconResolver) {
        let (theme, paths) = self.search_paths();
        (theme, IconResolver::new(paths, self.desktop_dirs()))
    }

    pub fn list_windows(&self) -> Vec<RunningWindow> {
        match self.windows.list_windows() {
            Probe::Value(windows) => windows,
            Probe::Absent => Vec::new(),
            Probe::Fallback { reason } => {
                warn!(event = "core.service.window_list_fallback", reason = %reason);
                Vec::new()
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        info!(event = "core.service.snapshot_started");
        let (theme, resolver) = self.resolver();
        let windows = self.list_windows();
        let icons = resolver.resolve_all(&windows);

        let grid = &self.config.grid;
        let sizes = vec![
            TileSize {
                width: grid.tile_width,
                height: grid.tile_height,
            };
            windows.len()
        ];
        let placements = place_tiles(&sizes, grid.screen_width, grid.padding);

        let entries: Vec<OverviewEntry> = windows
            .into_iter()
            .zip(icons)
            .zip(placements)
            .map(|((window, icon), placement)| OverviewEntry {
                window,
                icon,
                placement,
            })
            .collect();

        info!(
            event = "core.service.snapshot_completed",
            theme = %theme,
            windows = entries.len(),
            placeholders = entries.iter().filter(|e| e.icon.is_placeholder()).count()
        );
        Snapshot { theme, entries }
    }

    /// Resolve a window described by hand, without asking the window source.
    pub fn resolve_one(&self, title: &str, class: Option<&str>) -> (RunningWindow, ResolvedIcon) {
        let exec_hint = class
            .and_then(|class| class.rsplit('.').next())
            .unwrap_or_default()
            .to_lowercase();
        let window = RunningWindow::new("manual", &exec_hint, title);
        let (_, resolver) = self.resolver();
        let icon = resolver.resolve(&window);
        (window, icon)
    }

    pub fn focus(&self, window_id: &str) {
        self.focus.focus(window_id);
    }
}
