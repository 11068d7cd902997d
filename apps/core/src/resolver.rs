use std::path::PathBuf;

use tracing::{debug, debug_span, info};

use crate::candidates::{build_candidates, IconCandidateList};
use crate::desktop_entry::{locate, read_icon};
use crate::icon_search::find_icon;
use crate::model::{ResolvedIcon, RunningWindow};
use crate::normalize::normalize;
use crate::theme::IconSearchPath;

/// Maps windows to icon files against a fixed search path and descriptor list.
///
/// Holds only immutable inputs, so one resolver can be shared across threads
/// and repeated runs over unchanged files give identical answers.
pub struct IconResolver {
    search_path: IconSearchPath,
    desktop_dirs: Vec<PathBuf>,
}

impl IconResolver {
    pub fn new(search_path: IconSearchPath, desktop_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            desktop_dirs,
        }
    }

    pub fn search_path(&self) -> &IconSearchPath {
        &self.search_path
    }

    pub fn candidates_for(&self, window: &RunningWindow) -> IconCandidateList {
        let hint = normalize(&window.title);
        let descriptor = locate(&hint, &self.desktop_dirs);
        let declared = read_icon(descriptor.as_ref()).value();

        build_candidates(
            declared.as_deref(),
            Some(window.exec_hint.as_str()),
            Some(hint.as_str()),
        )
    }

    pub fn resolve(&self, window: &RunningWindow) -> ResolvedIcon {
        let span = debug_span!("resolve_window", window_id = %window.id);
        let _guard = span.enter();

        let candidates = self.candidates_for(window);
        debug!(
            event = "core.resolver.candidates_built",
            candidates = ?candidates.names()
        );

        for candidate in candidates.entries() {
            if let Some(path) = find_icon(&candidate.name, &self.search_path) {
                info!(
                    event = "core.resolver.icon_found",
                    window_id = %window.id,
                    candidate = %candidate.name,
                    source = candidate.source.label(),
                    path = %path.display()
                );
                return ResolvedIcon::Found(path);
            }
            debug!(
                event = "core.resolver.candidate_missed",
                candidate = %candidate.name
            );
        }

        info!(
            event = "core.resolver.icon_absent",
            window_id = %window.id,
            title = %window.title
        );
        ResolvedIcon::Absent
    }

    pub fn resolve_all(&self, windows: &[RunningWindow]) -> Vec<ResolvedIcon> {
        windows.iter().map(|window| self.resolve(window)).collect()
    }
}
