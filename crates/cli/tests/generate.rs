//! End-to-end runs of the generator against temp directories.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use specgen_cli::{Args, Outcome, generate};
use specgen_core::Error;
use tempfile::TempDir;

fn args(dir: &Path) -> Args {
    Args {
        target_dir: dir.to_path_buf(),
        overrides: None,
        dry_run: false,
        namespace: None,
        verbose: false,
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn written(outcome: Outcome) -> Vec<PathBuf> {
    match outcome {
        Outcome::Generated { written, .. } => written,
        Outcome::Planned { .. } => Vec::new(),
    }
}

#[test]
fn test_generates_docker_models() {
    let temp_dir = TempDir::new().unwrap();
    let outcome = generate(&args(temp_dir.path()), &mut Vec::new()).unwrap();
    let written = written(outcome);
    assert!(!written.is_empty());
    assert_eq!(file_names(temp_dir.path()).len(), written.len());

    let list =
        fs::read_to_string(temp_dir.path().join("ContainerListResponse.Generated.cs")).unwrap();
    assert!(list.contains("namespace Docker.DotNet.Models"));
    assert!(list.contains("public class ContainerListResponse // (container.Summary)"));
    assert!(list.contains("public SummaryHostConfig HostConfig { get; set; }"));

    let stop =
        fs::read_to_string(temp_dir.path().join("ContainerStopParameters.Generated.cs")).unwrap();
    assert!(stop.contains("[QueryStringParameter(\"t\", false)]"));
}

#[test]
fn test_missing_target_dir_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("models");
    let err = generate(&args(&missing), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, Error::TargetDirMissing { ref path } if *path == missing));
    assert!(!missing.exists());
    assert!(file_names(temp_dir.path()).is_empty());
}

#[test]
fn test_dry_run_with_missing_target_dir_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("models");
    let mut dry = args(&missing);
    dry.dry_run = true;

    let mut out = Vec::new();
    let err = generate(&dry, &mut out).unwrap_err();
    assert!(matches!(err, Error::TargetDirMissing { ref path } if *path == missing));
    assert!(out.is_empty());
    assert!(!missing.exists());
}

#[test]
fn test_stale_artifacts_are_replaced() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Obsolete.Generated.cs"), "old").unwrap();
    fs::write(temp_dir.path().join("ContainerState.Generated.cs"), "old").unwrap();
    fs::write(temp_dir.path().join("TaskState.cs"), "hand written").unwrap();

    let outcome = generate(&args(temp_dir.path()), &mut Vec::new()).unwrap();
    match outcome {
        Outcome::Generated { removed, .. } => assert_eq!(removed, 2),
        Outcome::Planned { .. } => unreachable!(),
    }

    let names = file_names(temp_dir.path());
    assert!(!names.iter().any(|name| name == "Obsolete.Generated.cs"));
    assert!(names.iter().any(|name| name == "TaskState.cs"));
    let state = fs::read_to_string(temp_dir.path().join("ContainerState.Generated.cs")).unwrap();
    assert!(state.contains("public class ContainerState"));
}

#[test]
fn test_second_run_is_identical() {
    let temp_dir = TempDir::new().unwrap();
    generate(&args(temp_dir.path()), &mut Vec::new()).unwrap();
    let path = temp_dir.path().join("SwarmService.Generated.cs");
    let first = fs::read_to_string(&path).unwrap();

    generate(&args(temp_dir.path()), &mut Vec::new()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_dry_run_prints_plan_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut dry = args(temp_dir.path());
    dry.dry_run = true;

    let mut out = Vec::new();
    let outcome = generate(&dry, &mut out).unwrap();
    let Outcome::Planned { models } = outcome else {
        unreachable!()
    };

    let plan: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let entries = plan.as_array().unwrap();
    assert_eq!(entries.len(), models);
    assert_eq!(entries[0]["name"], "ContainerListResponse");
    assert!(file_names(temp_dir.path()).is_empty());
}

#[test]
fn test_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();
    let overrides = temp_dir.path().join("overrides.toml");
    fs::write(
        &overrides,
        r#"
namespace = "Acme.Docker"
suffix = ".g.cs"

[types."container.PathStat"]
name = "PathInfo"
"#,
    )
    .unwrap();

    let mut run = args(&out_dir);
    run.overrides = Some(overrides);
    generate(&run, &mut Vec::new()).unwrap();

    let names = file_names(&out_dir);
    assert!(names.iter().all(|name| name.ends_with(".g.cs")));
    let info = fs::read_to_string(out_dir.join("PathInfo.g.cs")).unwrap();
    assert!(info.contains("namespace Acme.Docker"));
}

#[test]
fn test_overrides_with_unknown_type_fail() {
    let temp_dir = TempDir::new().unwrap();
    let overrides = temp_dir.path().join("overrides.toml");
    fs::write(&overrides, "[types.\"container.Nope\"]\nname = \"Nope\"\n").unwrap();

    let mut run = args(temp_dir.path());
    run.overrides = Some(overrides);
    let err = generate(&run, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, Error::UnknownType { ref name } if name == "container.Nope"));
    assert_eq!(file_names(temp_dir.path()), ["overrides.toml"]);
}
