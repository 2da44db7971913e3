//! Load and validate launcher configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod builder;
pub mod launcher;
pub mod telemetry;

pub use builder::{
    default_builder_section, parse_builder_section, BuilderSection, RawBuilderSection,
    DEFAULT_CARGO_PATH,
};
pub use launcher::{
    default_launcher_section, parse_launcher_section, LauncherSection, RawLauncherSection,
    DEFAULT_ARTIFACT_NAME, DEFAULT_LOG_DIR_NAME, DEFAULT_ROOT_DIR,
};

pub const CONFIG_ENV_KEY: &str = "INDEXERCTL_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "launcher.toml";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub launcher: LauncherSection,
    pub builder: BuilderSection,
    /// File the configuration was read from; `None` when running on defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    launcher: Option<RawLauncherSection>,
    builder: Option<RawBuilderSection>,
}

impl LauncherConfig {
    /// Built-in defaults, used when no configuration file is present.
    pub fn defaults() -> Self {
        let launcher = default_launcher_section();
        let builder = default_builder_section(&launcher.root_dir);
        Self {
            launcher,
            builder,
            source_path: None,
        }
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist and was not explicitly requested.
    pub fn load_or_defaults(path: PathBuf, required: bool) -> Result<Self, ConfigError> {
        if !required && !path.exists() {
            info!(
                target: "indexerctl::config",
                path = %path.display(),
                "No configuration file found; using built-in defaults"
            );
            return Ok(Self::defaults());
        }
        Self::load_from_path(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "indexerctl::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "indexerctl::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "indexerctl::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "indexerctl::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let launcher = parse_launcher_section(raw.launcher, &path)?;
        let builder = parse_builder_section(raw.builder, &path, &launcher.root_dir)?;

        Ok(Self {
            launcher,
            builder,
            source_path: Some(path),
        })
    }
}
