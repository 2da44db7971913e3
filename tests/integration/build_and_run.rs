#![cfg(unix)]

use std::{fs, path::PathBuf};

use tempfile::tempdir;

use indexerctl::{
    builder::run_build,
    launcher::BuildProfile,
    lib::errors::BuildError,
};

use crate::common;

// Stand-in for cargo: honours --release and leaves a runnable script in the
// matching target directory.
const FAKE_CARGO: &str = r#"#!/bin/sh
dir=target/debug
for arg in "$@"; do
    [ "$arg" = "--release" ] && dir=target/release
done
mkdir -p "$dir"
printf '#!/bin/sh\necho built indexer\n' > "$dir/blob-indexer"
chmod +x "$dir/blob-indexer"
"#;

#[tokio::test]
async fn build_installs_artifact_at_deterministic_path() {
    let temp = tempdir().expect("can create temp directory");
    let cargo = temp.path().join("fake-cargo");
    common::install_script(&cargo, FAKE_CARGO);
    let mut config = common::config_at(temp.path());
    config.builder.cargo_path = cargo;

    let report = run_build(&config, BuildProfile::Debug)
        .await
        .expect("build should succeed");

    let installed = temp.path().join("blob-indexer-debug");
    assert!(installed.exists(), "artifact must be installed");
    assert_eq!(report.profile, "debug");
    assert_eq!(report.artifact_path, installed.display().to_string());
    assert_eq!(
        report.artifact_sha256.len(),
        64,
        "sha256 digest must be hex encoded"
    );
}

#[tokio::test]
async fn release_profile_installs_from_release_target() {
    let temp = tempdir().expect("can create temp directory");
    let cargo = temp.path().join("fake-cargo");
    common::install_script(&cargo, FAKE_CARGO);
    let mut config = common::config_at(temp.path());
    config.builder.cargo_path = cargo;

    run_build(&config, BuildProfile::Release)
        .await
        .expect("release build should succeed");

    assert!(temp.path().join("target/release/blob-indexer").exists());
    assert!(temp.path().join("blob-indexer-release").exists());
}

#[tokio::test]
async fn stale_artifact_is_replaced_unconditionally() {
    let temp = tempdir().expect("can create temp directory");
    let cargo = temp.path().join("fake-cargo");
    common::install_script(&cargo, FAKE_CARGO);
    let mut config = common::config_at(temp.path());
    config.builder.cargo_path = cargo;

    let destination = temp.path().join("blob-indexer-debug");
    fs::write(&destination, b"stale binary bytes").expect("can plant stale artifact");

    run_build(&config, BuildProfile::Debug)
        .await
        .expect("build should succeed");

    let content = fs::read_to_string(&destination).expect("can read installed artifact");
    assert!(
        content.contains("built indexer"),
        "stale bytes must be gone: {content}"
    );
}

#[tokio::test]
async fn compiler_failure_aborts_without_install() {
    let temp = tempdir().expect("can create temp directory");
    let mut config = common::config_at(temp.path());
    config.builder.cargo_path = PathBuf::from("/bin/false");

    let error = run_build(&config, BuildProfile::Debug)
        .await
        .expect_err("failing compiler must abort the build");

    assert!(matches!(error, BuildError::Compiler { .. }), "error: {error:?}");
    assert!(
        !temp.path().join("blob-indexer-debug").exists(),
        "no artifact may be installed after a failed build"
    );
}

#[tokio::test]
async fn build_without_output_reports_missing_artifact() {
    let temp = tempdir().expect("can create temp directory");
    let cargo = temp.path().join("fake-cargo");
    common::install_script(&cargo, "#!/bin/sh\nexit 0\n");
    let mut config = common::config_at(temp.path());
    config.builder.cargo_path = cargo;

    let error = run_build(&config, BuildProfile::Debug)
        .await
        .expect_err("a build that produces nothing must fail");

    assert!(
        matches!(error, BuildError::OutputMissing { .. }),
        "error: {error:?}"
    );
}
