//! Indexer artifact launch: profile and mode resolution, log provisioning,
//! and child process startup.
pub mod spawn;

use std::{fs, path::PathBuf, process::ExitStatus, str::FromStr};

use clap::ValueEnum;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    config::LauncherConfig,
    lib::{errors::LaunchError, fs as launcher_fs, telemetry::LaunchSpan},
};

/// Combined stdout+stderr log shared by all launches regardless of profile.
pub const LOG_FILE_NAME: &str = "indexer.log";

/// Deterministic artifact path for a profile: `<root>/<name>-<profile>`.
pub fn artifact_path(
    section: &crate::config::LauncherSection,
    profile: BuildProfile,
) -> PathBuf {
    section
        .root_dir
        .join(format!("{}-{}", section.artifact_name, profile.as_str()))
}

/// Build profile selecting which prebuilt artifact to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BuildProfile {
    #[default]
    Debug,
    Release,
}

impl BuildProfile {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BuildProfile::Debug => "debug",
            BuildProfile::Release => "release",
        }
    }
}

impl FromStr for BuildProfile {
    type Err = LaunchError;

    // Case-sensitive on purpose: `Debug` is not a valid profile.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "debug" => Ok(BuildProfile::Debug),
            "release" => Ok(BuildProfile::Release),
            other => Err(LaunchError::InvalidProfile {
                value: other.to_string(),
            }),
        }
    }
}

/// Whether the launcher blocks on the child or detaches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LaunchMode {
    Foreground,
    #[default]
    Background,
}

impl LaunchMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LaunchMode::Foreground => "foreground",
            LaunchMode::Background => "background",
        }
    }
}

impl FromStr for LaunchMode {
    type Err = LaunchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "foreground" => Ok(LaunchMode::Foreground),
            "background" => Ok(LaunchMode::Background),
            other => Err(LaunchError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Terminal state of one launch invocation.
#[derive(Debug)]
pub enum LaunchOutcome {
    /// Background child left running; no handle retained.
    Detached { pid: u32 },
    /// Foreground child ran to completion.
    Completed { status: ExitStatus },
}

impl LaunchOutcome {
    /// Exit code to propagate, if the child terminated with one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            LaunchOutcome::Detached { .. } => None,
            LaunchOutcome::Completed { status } => status.code(),
        }
    }
}

/// Translates a validated profile and mode into a running child process with
/// captured output.
#[derive(Debug, Clone)]
pub struct Launcher {
    config: LauncherConfig,
}

impl Launcher {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    /// Artifact path this launcher resolves for a profile.
    pub fn artifact_path(&self, profile: BuildProfile) -> PathBuf {
        artifact_path(&self.config.launcher, profile)
    }

    /// Path of the shared append-only log file.
    pub fn log_file_path(&self) -> PathBuf {
        self.config.launcher.log_dir.join(LOG_FILE_NAME)
    }

    /// Launch with raw string inputs, validating them before any side effect.
    pub async fn launch_str(
        &self,
        profile: &str,
        mode: Option<&str>,
    ) -> Result<LaunchOutcome, LaunchError> {
        let profile = profile.parse::<BuildProfile>()?;
        let mode = match mode {
            Some(value) => value.parse::<LaunchMode>()?,
            None => LaunchMode::default(),
        };
        self.launch(profile, mode).await
    }

    /// Launch the artifact for `profile` in the given `mode`.
    ///
    /// Side effects in order: log directory creation (recursive, idempotent),
    /// append-open of the log file, then the spawn itself. A missing artifact
    /// is a warning, not an abort, unless `strict_artifact_check` is set; the
    /// spawn attempt then fails on its own and is surfaced as `Spawn`.
    pub async fn launch(
        &self,
        profile: BuildProfile,
        mode: LaunchMode,
    ) -> Result<LaunchOutcome, LaunchError> {
        let artifact = self.artifact_path(profile);
        if !artifact.exists() {
            if self.config.launcher.strict_artifact_check {
                return Err(LaunchError::ArtifactMissing { path: artifact });
            }
            warn!(
                target: "indexerctl::launcher",
                artifact = %artifact.display(),
                "binary not found; attempting launch anyway"
            );
        }

        let log_dir = &self.config.launcher.log_dir;
        fs::create_dir_all(log_dir).map_err(|source| LaunchError::LogDirCreation {
            path: log_dir.clone(),
            source,
        })?;

        let log_path = self.log_file_path();
        let log_file =
            launcher_fs::open_append(&log_path).map_err(|source| LaunchError::LogFileOpen {
                path: log_path.clone(),
                source,
            })?;

        let span = LaunchSpan::start(Uuid::new_v4(), profile.as_str(), mode.as_str());
        match mode {
            LaunchMode::Background => {
                let pid = spawn::spawn_detached(&artifact, &log_file).map_err(|source| {
                    LaunchError::Spawn {
                        artifact: artifact.clone(),
                        source,
                    }
                })?;
                info!(
                    target: "indexerctl::launcher",
                    artifact = %artifact.display(),
                    pid,
                    log_file = %log_path.display(),
                    "Started indexer in background"
                );
                span.finish("detached", None);
                Ok(LaunchOutcome::Detached { pid })
            }
            LaunchMode::Foreground => {
                let mut child = spawn::spawn_attached(&artifact, &log_file).map_err(|source| {
                    LaunchError::Spawn {
                        artifact: artifact.clone(),
                        source,
                    }
                })?;
                let status = child.wait().await.map_err(|source| LaunchError::Wait {
                    artifact: artifact.clone(),
                    source,
                })?;
                span.finish(
                    if status.success() { "succeeded" } else { "failed" },
                    status.code(),
                );
                Ok(LaunchOutcome::Completed { status })
            }
        }
    }
}
