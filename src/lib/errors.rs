use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures raised while launching an indexer artifact.
///
/// `InvalidProfile` and `InvalidMode` are usage errors and occur before any
/// filesystem side effect.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("mode not match: `{value}` is not a build profile (expected `debug` or `release`)")]
    InvalidProfile { value: String },
    #[error("`{value}` is not a launch mode (expected `foreground` or `background`)")]
    InvalidMode { value: String },
    #[error("Artifact {path} does not exist")]
    ArtifactMissing { path: PathBuf },
    #[error("Failed to create log directory {path}: {source}")]
    LogDirCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to open log file {path} for append: {source}")]
    LogFileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to spawn {artifact}: {source}")]
    Spawn {
        artifact: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed while waiting for {artifact}: {source}")]
    Wait {
        artifact: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures raised by the builder collaborator and artifact installation.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to spawn build command `{program}`: {source}")]
    CompilerSpawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Build command exited abnormally (exit={exit_code:?})")]
    Compiler { exit_code: Option<i32> },
    #[error("Build succeeded but produced no artifact at {path}")]
    OutputMissing { path: PathBuf },
    #[error("Failed to install artifact at {path}: {source}")]
    Install {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to checksum artifact {path}: {source}")]
    Checksum {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
