//! Entry point for indexerctl.
use std::process::ExitCode;

use clap::Parser;
use indexerctl::{
    builder,
    cli::{self, ConfigSource, LaunchArgs, LauncherArgs, LauncherCommand, RuntimeExit},
    config::{telemetry as config_telemetry, LauncherConfig},
    launcher::Launcher,
    lib::telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LauncherArgs::parse();

    let (config_path, source) =
        cli::resolve_config_path(args.config_override).map_err(RuntimeExit::from_error)?;
    config_telemetry::log_config_source(&config_path, source);
    let config = LauncherConfig::load_or_defaults(config_path, source != ConfigSource::Default)
        .map_err(RuntimeExit::from_error)?;

    match args.command {
        LauncherCommand::Start(launch) => launch_artifact(config, launch).await,
        LauncherCommand::Run(launch) => {
            let report = builder::run_build(&config, launch.profile)
                .await
                .map_err(RuntimeExit::from_error)?;
            let payload = cli::build_payload(&report).map_err(RuntimeExit::from_error)?;
            println!("{payload}");
            launch_artifact(config, launch).await
        }
    }
}

async fn launch_artifact(
    config: LauncherConfig,
    launch: LaunchArgs,
) -> Result<ExitCode, RuntimeExit> {
    let launcher = Launcher::new(config);
    let log_file = launcher.log_file_path();
    let outcome = launcher
        .launch(launch.profile, launch.mode)
        .await
        .map_err(RuntimeExit::from_error)?;

    if let Some(payload) = cli::started_payload(launch.profile, &outcome, &log_file)
        .map_err(RuntimeExit::from_error)?
    {
        println!("{payload}");
    }
    Ok(cli::exit_code_for(&outcome))
}
