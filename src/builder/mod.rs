//! Builder collaborator: refresh the per-profile artifact with cargo and
//! install it at the deterministic launch path.

use std::{path::PathBuf, time::Instant};

use serde::Serialize;
use tracing::info;

use crate::{
    config::LauncherConfig,
    launcher::{artifact_path, BuildProfile},
    lib::{errors::BuildError, fs as builder_fs},
};

/// Result of a successful build-and-install, printed by the CLI as JSON.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub profile: &'static str,
    pub artifact_path: String,
    pub artifact_sha256: String,
    pub duration_ms: u128,
}

/// Build the artifact for `profile` and install it at `<root>/<name>-<profile>`.
///
/// Build output is inherited to the invoking terminal. The previous artifact
/// at the destination is replaced unconditionally, so a stale binary is never
/// silently reused. Any failure aborts before the launch step runs.
pub async fn run_build(
    config: &LauncherConfig,
    profile: BuildProfile,
) -> Result<BuildReport, BuildError> {
    let start = Instant::now();
    let cargo = &config.builder.cargo_path;

    let mut command = tokio::process::Command::new(cargo);
    command
        .arg("build")
        .current_dir(&config.builder.manifest_dir);
    if matches!(profile, BuildProfile::Release) {
        command.arg("--release");
    }

    info!(
        target: "indexerctl::builder",
        cargo = %cargo.display(),
        manifest_dir = %config.builder.manifest_dir.display(),
        profile = profile.as_str(),
        "Starting artifact build"
    );

    let status = command
        .status()
        .await
        .map_err(|source| BuildError::CompilerSpawn {
            program: cargo.display().to_string(),
            source,
        })?;
    if !status.success() {
        return Err(BuildError::Compiler {
            exit_code: status.code(),
        });
    }

    let built = build_output_path(config, profile);
    if !built.exists() {
        return Err(BuildError::OutputMissing { path: built });
    }

    let destination = artifact_path(&config.launcher, profile);
    builder_fs::replace_file(&built, &destination).map_err(|source| BuildError::Install {
        path: destination.clone(),
        source,
    })?;
    let artifact_sha256 =
        builder_fs::compute_sha256(&destination).map_err(|source| BuildError::Checksum {
            path: destination.clone(),
            source,
        })?;

    info!(
        target: "indexerctl::builder",
        artifact = %destination.display(),
        sha256 = %artifact_sha256,
        "Artifact installed"
    );

    Ok(BuildReport {
        profile: profile.as_str(),
        artifact_path: destination.display().to_string(),
        artifact_sha256,
        duration_ms: start.elapsed().as_millis(),
    })
}

/// Where cargo leaves the freshly built binary for a profile.
fn build_output_path(config: &LauncherConfig, profile: BuildProfile) -> PathBuf {
    config
        .builder
        .manifest_dir
        .join("target")
        .join(profile.as_str())
        .join(&config.launcher.artifact_name)
}
