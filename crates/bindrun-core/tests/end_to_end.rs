//! End-to-end pipeline tests against a stub generator in a temporary root.

#![cfg(unix)]

use bindrun_core::{Error, Generator, Layout, LayoutConfig, Platform};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

/// Build a fixture workspace: a stub `uniffi-bindgen-php` that records its
/// argument vector next to itself and exits with the given code, plus the
/// shared library and forwarded config the layout expects.
fn stub_root(exit_code: i32) -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let binaries = root.path().join("target/debug");
    fs::create_dir_all(&binaries).unwrap();

    let tool = binaries.join("uniffi-bindgen-php");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$(dirname \"$0\")/args.txt\"\nexit {}\n",
        exit_code
    );
    fs::write(&tool, script).unwrap();
    let mut perms = fs::metadata(&tool).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&tool, perms).unwrap();

    fs::write(binaries.join("libuniffi_fixtures.so"), b"").unwrap();
    fs::create_dir_all(root.path().join("fixtures")).unwrap();
    fs::write(root.path().join("fixtures/uniffi.toml"), b"").unwrap();
    root
}

fn layout_for(root: &Path) -> Layout {
    Layout::resolve(
        root.to_path_buf(),
        Platform::from_identifier("linux").unwrap(),
        &LayoutConfig::default(),
    )
}

fn recorded_args(root: &Path) -> Option<Vec<String>> {
    let recorded = root.join("target/debug/args.txt");
    let content = fs::read_to_string(recorded).ok()?;
    Some(content.lines().map(str::to_string).collect())
}

#[test]
fn run_resets_output_and_forwards_arguments() {
    let root = stub_root(0);
    let layout = layout_for(root.path());

    let stale = layout.bindings_dir.join("stale.txt");
    fs::create_dir_all(&layout.bindings_dir).unwrap();
    fs::write(&stale, b"old").unwrap();

    Generator::new(layout.clone()).run().unwrap();

    assert!(!stale.exists());
    assert!(layout.bindings_dir.is_dir());
    assert_eq!(fs::read_dir(&layout.bindings_dir).unwrap().count(), 0);

    let args = recorded_args(root.path()).expect("stub generator was not invoked");
    assert_eq!(
        args,
        [
            layout.library_file.display().to_string(),
            "--out-dir".to_string(),
            layout.bindings_dir.display().to_string(),
            "--library".to_string(),
            "--config".to_string(),
            layout.bindgen_config.display().to_string(),
        ]
    );
}

#[test]
fn generator_failure_is_mirrored() {
    let root = stub_root(7);
    let layout = layout_for(root.path());

    let err = Generator::new(layout).run().unwrap_err();

    assert!(matches!(err, Error::GeneratorFailed { .. }));
    assert_eq!(err.generator_exit_code(), Some(7));
}

#[test]
fn missing_library_aborts_before_invocation() {
    let root = stub_root(0);
    let layout = layout_for(root.path());
    fs::remove_file(&layout.library_file).unwrap();

    let stale = layout.bindings_dir.join("stale.txt");
    fs::create_dir_all(&layout.bindings_dir).unwrap();
    fs::write(&stale, b"old").unwrap();

    let err = Generator::new(layout).run().unwrap_err();

    assert!(matches!(err, Error::LibraryMissing { .. }));
    // Fail-fast: the stale output survives and the stub never ran.
    assert!(stale.exists());
    assert!(recorded_args(root.path()).is_none());
}

#[test]
fn missing_generator_aborts_before_invocation() {
    let root = stub_root(0);
    let layout = layout_for(root.path());
    fs::remove_file(&layout.generator).unwrap();

    let err = Generator::new(layout).run().unwrap_err();

    assert!(matches!(err, Error::GeneratorMissing { .. }));
}
