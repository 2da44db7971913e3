#![cfg(unix)]

use std::{fs, time::Instant};

use tempfile::tempdir;

use indexerctl::launcher::{BuildProfile, LaunchMode, LaunchOutcome, Launcher};

use crate::common;

#[tokio::test]
async fn background_launch_returns_before_child_exits() {
    let temp = tempdir().expect("can create temp directory");
    common::install_script(
        &temp.path().join("blob-indexer-debug"),
        "#!/bin/sh\nsleep 3\necho late line\n",
    );
    let launcher = Launcher::new(common::config_at(temp.path()));

    let started = Instant::now();
    let outcome = launcher
        .launch(BuildProfile::Debug, LaunchMode::Background)
        .await
        .expect("background launch should succeed");
    let elapsed = started.elapsed();

    assert!(
        elapsed.as_millis() < 1500,
        "background launch must not block on the child (took {elapsed:?})"
    );
    match outcome {
        LaunchOutcome::Detached { pid } => assert!(pid > 0, "detached child must have a pid"),
        other => panic!("Unexpected outcome: {other:?}"),
    }
    assert!(temp.path().join("logs").exists(), "log directory is provisioned");
}

#[tokio::test]
async fn repeated_launches_append_to_the_same_log() {
    let temp = tempdir().expect("can create temp directory");
    common::install_script(
        &temp.path().join("blob-indexer-debug"),
        "#!/bin/sh\necho one indexer line\n",
    );
    let launcher = Launcher::new(common::config_at(temp.path()));

    for _ in 0..3 {
        launcher
            .launch(BuildProfile::Debug, LaunchMode::Background)
            .await
            .expect("background launch should succeed");
    }

    let lines = common::wait_for_line_count(&common::log_path(temp.path()), 3).await;
    assert_eq!(lines, 3, "three launches must leave three appended lines");
}

#[tokio::test]
async fn log_directory_creation_is_idempotent_and_never_truncates() {
    let temp = tempdir().expect("can create temp directory");
    common::install_script(
        &temp.path().join("blob-indexer-release"),
        "#!/bin/sh\necho release line\n",
    );
    fs::create_dir_all(temp.path().join("logs")).expect("can pre-create log directory");
    fs::write(common::log_path(temp.path()), "preexisting line\n").expect("can seed log");

    let launcher = Launcher::new(common::config_at(temp.path()));
    launcher
        .launch(BuildProfile::Release, LaunchMode::Foreground)
        .await
        .expect("foreground launch should succeed");

    let content =
        fs::read_to_string(common::log_path(temp.path())).expect("log file must exist");
    assert!(
        content.starts_with("preexisting line\n"),
        "prior log content must survive: {content}"
    );
    assert!(content.contains("release line"), "log content: {content}");
}

#[tokio::test]
async fn foreground_launch_propagates_child_exit_code() {
    let temp = tempdir().expect("can create temp directory");
    common::install_script(
        &temp.path().join("blob-indexer-debug"),
        "#!/bin/sh\necho about to fail\nexit 7\n",
    );
    let launcher = Launcher::new(common::config_at(temp.path()));

    let outcome = launcher
        .launch(BuildProfile::Debug, LaunchMode::Foreground)
        .await
        .expect("foreground launch runs to child termination");

    match outcome {
        LaunchOutcome::Completed { status } => assert_eq!(status.code(), Some(7)),
        other => panic!("Unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn foreground_launch_blocks_until_child_terminates() {
    let temp = tempdir().expect("can create temp directory");
    common::install_script(
        &temp.path().join("blob-indexer-debug"),
        "#!/bin/sh\nsleep 1\necho slow line\n",
    );
    let launcher = Launcher::new(common::config_at(temp.path()));

    let started = Instant::now();
    let outcome = launcher
        .launch(BuildProfile::Debug, LaunchMode::Foreground)
        .await
        .expect("foreground launch should succeed");

    assert!(
        started.elapsed().as_millis() >= 900,
        "foreground launch must wait for the child"
    );
    assert_eq!(outcome.exit_code(), Some(0));
    let content =
        fs::read_to_string(common::log_path(temp.path())).expect("log file must exist");
    assert!(content.contains("slow line"), "log content: {content}");
}

#[tokio::test]
async fn both_output_streams_land_in_one_log() {
    let temp = tempdir().expect("can create temp directory");
    common::install_script(
        &temp.path().join("blob-indexer-debug"),
        "#!/bin/sh\necho to stdout\necho to stderr >&2\n",
    );
    let launcher = Launcher::new(common::config_at(temp.path()));

    launcher
        .launch(BuildProfile::Debug, LaunchMode::Foreground)
        .await
        .expect("foreground launch should succeed");

    let content =
        fs::read_to_string(common::log_path(temp.path())).expect("log file must exist");
    assert!(content.contains("to stdout"), "log content: {content}");
    assert!(content.contains("to stderr"), "log content: {content}");
}
