use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_CARGO_PATH: &str = "cargo";

/// `[builder]` configuration section for the build-and-run pipeline.
#[derive(Debug, Clone)]
pub struct BuilderSection {
    /// Compiler driver invoked to refresh the artifact.
    pub cargo_path: PathBuf,
    /// Directory the build runs in; its `target/` tree holds the output.
    pub manifest_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct RawBuilderSection {
    pub cargo_path: Option<PathBuf>,
    pub manifest_dir: Option<PathBuf>,
}

pub fn parse_builder_section(
    raw: Option<RawBuilderSection>,
    path: &Path,
    root_dir: &Path,
) -> Result<BuilderSection, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default_builder_section(root_dir));
    };

    let cargo_path = raw
        .cargo_path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CARGO_PATH));
    if cargo_path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "builder.cargo_path",
            message: "Provide a compiler driver executable".into(),
        });
    }

    let manifest_dir = raw
        .manifest_dir
        .unwrap_or_else(|| root_dir.to_path_buf());
    if manifest_dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "builder.manifest_dir",
            message: "Provide a non-empty directory path".into(),
        });
    }

    Ok(BuilderSection {
        cargo_path,
        manifest_dir,
    })
}

pub fn default_builder_section(root_dir: &Path) -> BuilderSection {
    BuilderSection {
        cargo_path: PathBuf::from(DEFAULT_CARGO_PATH),
        manifest_dir: root_dir.to_path_buf(),
    }
}
