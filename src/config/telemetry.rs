use tracing::{debug, info};

use crate::cli::ConfigSource;

use super::{LauncherConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_config_source(path: &std::path::Path, source: ConfigSource) {
    match source {
        ConfigSource::Cli => info!(
            target: "indexerctl::config",
            path = %path.display(),
            "Loading configuration from --config override"
        ),
        ConfigSource::Env => info!(
            target: "indexerctl::config",
            path = %path.display(),
            "Loading configuration using INDEXERCTL_CONFIG_PATH environment variable"
        ),
        ConfigSource::Default => debug!(
            target: "indexerctl::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "No configuration override; using default launcher.toml"
        ),
    }
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "indexerctl::config",
        path = %config
            .source_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<defaults>".to_string()),
        root_dir = %config.launcher.root_dir.display(),
        log_dir = %config.launcher.log_dir.display(),
        artifact_name = %config.launcher.artifact_name,
        strict_artifact_check = config.launcher.strict_artifact_check,
        "Configuration loaded"
    );
}
