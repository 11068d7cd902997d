use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;
use wait_timeout::ChildExt;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' did not finish within {timeout_ms}ms")]
    TimedOut { program: String, timeout_ms: u128 },

    #[error("'{program}' exited with {status}")]
    NonZeroExit { program: String, status: String },

    #[error("'{program}' produced non-UTF-8 output")]
    InvalidOutput { program: String },

    #[error("io error while waiting for '{program}': {source}")]
    Io {
        program: String,
        source: std::io::Error,
    },
}

/// Run an external tool and return its stdout, killing it once `timeout` elapses.
///
/// Stdout is drained on a helper thread so a chatty child can never block on a
/// full pipe. The same deadline bounds collecting that output: a background
/// grandchild still holding the pipe open counts as a timeout.
pub fn run_with_timeout(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<String, ProcessError> {
    debug!(event = "core.process.spawn_started", program = program, args = ?args);
    let deadline = Instant::now() + timeout;
    let timed_out = || ProcessError::TimedOut {
        program: program.to_string(),
        timeout_ms: timeout.as_millis(),
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let (sender, receiver) = mpsc::channel();
    if let Some(mut stdout) = child.stdout.take() {
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = stdout.read_to_end(&mut buffer);
            let _ = sender.send(buffer);
        });
    }

    let status = match child.wait_timeout(timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            debug!(event = "core.process.killed", program = program);
            return Err(timed_out());
        }
        Err(source) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ProcessError::Io {
                program: program.to_string(),
                source,
            });
        }
    };

    if !status.success() {
        return Err(ProcessError::NonZeroExit {
            program: program.to_string(),
            status: status.to_string(),
        });
    }

    let remaining = deadline.saturating_duration_since(Instant::now());
    let output = match receiver.recv_timeout(remaining) {
        Ok(buffer) => buffer,
        Err(RecvTimeoutError::Disconnected) => Vec::new(),
        Err(RecvTimeoutError::Timeout) => {
            debug!(event = "core.process.output_stalled", program = program);
            return Err(timed_out());
        }
    };

    String::from_utf8(output).map_err(|_| ProcessError::InvalidOutput {
        program: program.to_string(),
    })
}
