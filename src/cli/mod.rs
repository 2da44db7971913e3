//! CLI entrypoint module structure: argument types, exit plumbing, and the
//! JSON payloads printed on success.
use std::{path::Path, process::ExitCode};

use anyhow::{Error, Result};
use serde_json::json;

use crate::{builder::BuildReport, launcher::{BuildProfile, LaunchOutcome}};

pub mod args;
pub mod profile;

pub use args::{LaunchArgs, LauncherArgs, LauncherCommand};
pub use profile::{resolve_config_path, ConfigSource};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Exit code for a finished launch.
///
/// Foreground launches propagate the child's exit code; a signal-killed child
/// maps to a generic failure. Background launches only report spawn success.
pub fn exit_code_for(outcome: &LaunchOutcome) -> ExitCode {
    match outcome {
        LaunchOutcome::Detached { .. } => ExitCode::SUCCESS,
        LaunchOutcome::Completed { status } => match status.code() {
            Some(code) => u8::try_from(code)
                .map(ExitCode::from)
                .unwrap_or(ExitCode::FAILURE),
            None => ExitCode::FAILURE,
        },
    }
}

/// JSON payload reported after a successful background start.
///
/// Foreground launches print nothing of their own; the child already owns the
/// terminal and its output lands in the log file.
pub fn started_payload(
    profile: BuildProfile,
    outcome: &LaunchOutcome,
    log_file: &Path,
) -> Result<Option<String>> {
    let LaunchOutcome::Detached { pid } = outcome else {
        return Ok(None);
    };

    let payload = json!({
        "status": "started",
        "profile": profile.as_str(),
        "pid": pid,
        "log_file": log_file.to_string_lossy(),
    });
    Ok(Some(serde_json::to_string_pretty(&payload)?))
}

/// JSON payload for a completed build step.
pub fn build_payload(report: &BuildReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
