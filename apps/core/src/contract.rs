use serde::{Deserialize, Serialize};

use crate::core_service::{OverviewEntry, Snapshot};
use crate::model::{IconFormat, ResolvedIcon, RunningWindow};
use crate::theme::IconSearchPath;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IconFormatDto {
    Raster,
    Vector,
    Pixmap,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewEntryDto {
    pub id: String,
    pub title: String,
    pub exec_hint: String,
    pub icon_path: Option<String>,
    pub icon_format: Option<IconFormatDto>,
    pub placeholder: bool,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewSnapshotDto {
    pub theme: String,
    pub windows: Vec<OverviewEntryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveResultDto {
    pub title: String,
    pub exec_hint: String,
    pub icon_path: Option<String>,
    pub placeholder: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPathsDto {
    pub theme: String,
    pub roots: Vec<String>,
}

impl From<IconFormat> for IconFormatDto {
    fn from(value: IconFormat) -> Self {
        match value {
            IconFormat::Raster => Self::Raster,
            IconFormat::Vector => Self::Vector,
            IconFormat::Pixmap => Self::Pixmap,
        }
    }
}

fn icon_path_string(icon: &ResolvedIcon) -> Option<String> {
    icon.path().map(|path| path.to_string_lossy().into_owned())
}

impl From<OverviewEntry> for OverviewEntryDto {
    fn from(value: OverviewEntry) -> Self {
        Self {
            icon_path: icon_path_string(&value.icon),
            icon_format: value.icon.format().map(IconFormatDto::from),
            placeholder: value.icon.is_placeholder(),
            id: value.window.id,
            title: value.window.title,
            exec_hint: value.window.exec_hint,
            x: value.placement.x,
            y: value.placement.y,
        }
    }
}

impl From<Snapshot> for OverviewSnapshotDto {
    fn from(value: Snapshot) -> Self {
        Self {
            theme: value.theme,
            windows: value.entries.into_iter().map(OverviewEntryDto::from).collect(),
        }
    }
}

impl From<(RunningWindow, ResolvedIcon)> for ResolveResultDto {
    fn from((window, icon): (RunningWindow, ResolvedIcon)) -> Self {
        Self {
            title: window.title,
            exec_hint: window.exec_hint,
            icon_path: icon_path_string(&icon),
            placeholder: icon.is_placeholder(),
        }
    }
}

impl SearchPathsDto {
    pub fn new(theme: String, paths: &IconSearchPath) -> Self {
        Self {
            theme,
            roots: paths
                .roots()
                .iter()
                .map(|root| root.to_string_lossy().into_owned())
                .collect(),
        }
    }
}
