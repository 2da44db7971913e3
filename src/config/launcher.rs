use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_ROOT_DIR: &str = ".";
pub const DEFAULT_LOG_DIR_NAME: &str = "logs";
pub const DEFAULT_ARTIFACT_NAME: &str = "blob-indexer";

/// `[launcher]` configuration section.
#[derive(Debug, Clone)]
pub struct LauncherSection {
    /// Base directory holding the per-profile artifacts.
    pub root_dir: PathBuf,
    /// Directory the shared log file lives in, created on demand.
    pub log_dir: PathBuf,
    /// Artifact base name; the profile suffix is appended at launch time.
    pub artifact_name: String,
    /// Promote a missing artifact from a warning to a fatal precondition.
    pub strict_artifact_check: bool,
}

#[derive(Debug, Deserialize)]
pub struct RawLauncherSection {
    pub root_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub artifact_name: Option<String>,
    pub strict_artifact_check: Option<bool>,
}

pub fn parse_launcher_section(
    raw: Option<RawLauncherSection>,
    path: &Path,
) -> Result<LauncherSection, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default_launcher_section());
    };

    let root_dir = raw.root_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT_DIR));
    if root_dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.root_dir",
            message: "Provide a non-empty directory path".into(),
        });
    }

    let log_dir = raw
        .log_dir
        .unwrap_or_else(|| root_dir.join(DEFAULT_LOG_DIR_NAME));
    if log_dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.log_dir",
            message: "Provide a non-empty directory path".into(),
        });
    }

    let artifact_name = raw
        .artifact_name
        .unwrap_or_else(|| DEFAULT_ARTIFACT_NAME.to_string());
    validate_artifact_name(path, &artifact_name)?;

    Ok(LauncherSection {
        root_dir,
        log_dir,
        artifact_name,
        strict_artifact_check: raw.strict_artifact_check.unwrap_or(false),
    })
}

pub fn default_launcher_section() -> LauncherSection {
    let root_dir = PathBuf::from(DEFAULT_ROOT_DIR);
    let log_dir = root_dir.join(DEFAULT_LOG_DIR_NAME);
    LauncherSection {
        root_dir,
        log_dir,
        artifact_name: DEFAULT_ARTIFACT_NAME.to_string(),
        strict_artifact_check: false,
    }
}

fn validate_artifact_name(path: &Path, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.artifact_name",
            message: "Artifact name cannot be empty".into(),
        });
    }
    if name.contains(std::path::is_separator) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.artifact_name",
            message: format!("Artifact name cannot contain path separators: {name}"),
        });
    }
    Ok(())
}
