//! Configuration path resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::config::{CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

/// Where the effective configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

/// Resolve config path in the order: CLI override → env var → default.
///
/// Relative paths are anchored to the current working directory so the result
/// stays stable if the process later changes directory (the builder does).
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigSource::Cli),
        None => match env::var_os(CONFIG_ENV_KEY) {
            Some(value) if !value.is_empty() => (PathBuf::from(value), ConfigSource::Env),
            _ => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default),
        },
    };

    if path.is_absolute() {
        return Ok((path, source));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok((cwd.join(path), source))
}
