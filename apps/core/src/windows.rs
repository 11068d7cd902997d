use std::time::Duration;

use tracing::{info, warn};

use crate::model::{Probe, RunningWindow};
use crate::process::run_with_timeout;

pub trait WindowSource: Send + Sync {
    fn list_windows(&self) -> Probe<Vec<RunningWindow>>;
}

pub trait FocusRequester: Send + Sync {
    /// Fire-and-forget; implementations log and swallow their own failures.
    fn focus(&self, window_id: &str);
}

/// Lists windows through `wmctrl -lx`.
pub struct WmctrlWindowSource {
    timeout: Duration,
}

impl WmctrlWindowSource {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl WindowSource for WmctrlWindowSource {
    fn list_windows(&self) -> Probe<Vec<RunningWindow>> {
        match run_with_timeout("wmctrl", &["-lx"], self.timeout) {
            Ok(output) => Probe::Value(parse_wmctrl_listing(&output)),
            Err(error) => {
                warn!(event = "core.windows.list_failed", error = %error);
                Probe::fallback(error.to_string())
            }
        }
    }
}

/// Raises windows through `wmctrl -ia <id>`.
pub struct WmctrlFocus {
    timeout: Duration,
}

impl WmctrlFocus {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl FocusRequester for WmctrlFocus {
    fn focus(&self, window_id: &str) {
        match run_with_timeout("wmctrl", &["-ia", window_id], self.timeout) {
            Ok(_) => info!(event = "core.windows.focus_requested", window_id = window_id),
            Err(error) => warn!(
                event = "core.windows.focus_failed",
                window_id = window_id,
                error = %error
            ),
        }
    }
}

/// Parse `wmctrl -lx` output: `<id> <desktop> <class> <host> <title...>`.
///
/// Lines with fewer than five fields are skipped. The title keeps its inner
/// spacing.
pub fn parse_wmctrl_listing(output: &str) -> Vec<RunningWindow> {
    output
        .lines()
        .filter_map(|line| {
            let fields = split_fields(line, 5);
            if fields.len() < 5 {
                return None;
            }
            let exec_hint = fields[2]
                .rsplit('.')
                .next()
                .unwrap_or_default()
                .to_lowercase();
            Some(RunningWindow {
                id: fields[0].to_string(),
                exec_hint,
                title: fields[4].to_string(),
            })
        })
        .collect()
}

/// Split on whitespace runs into at most `max` fields; the last field is the
/// untouched remainder of the line.
fn split_fields(line: &str, max: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(max);
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        if fields.len() + 1 == max {
            fields.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                fields.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                fields.push(rest);
                break;
            }
        }
    }

    fields
}
