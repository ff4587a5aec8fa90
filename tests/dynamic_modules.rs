// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Resolution against a real shared-library module.
//!
//! The `upcase_processor` fixture crate is built once per test run and
//! copied onto a temporary search path under the names each test needs.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

use atp::backends::loadable::ModuleLoader;
use atp::backends::local::LocalProcessorFactory;
use atp::config::SearchPaths;
use atp::engine::ProcessorLoader;
use atp::errors::{LoaderError, ProcessorError};
use atp::record::{Array, Dictionary};
use atp::traits::{Handoff, LoadContext, RunContext};

const FINALIZE_LOG_ENV: &str = "UPCASE_FINALIZE_LOG";

fn fixture_library() -> &'static Path {
    static LIBRARY: OnceLock<PathBuf> = OnceLock::new();
    LIBRARY.get_or_init(|| {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures/upcase_processor/Cargo.toml");
        let target_dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("fixtures");
        let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());

        let status = Command::new(cargo)
            .arg("build")
            .arg("--manifest-path")
            .arg(&manifest)
            .arg("--target-dir")
            .arg(&target_dir)
            .status()
            .unwrap();
        assert!(status.success(), "fixture module failed to build");

        target_dir.join("debug").join(format!(
            "{}upcase_processor{}",
            std::env::consts::DLL_PREFIX,
            std::env::consts::DLL_SUFFIX
        ))
    })
}

/// A search directory holding the fixture module as `<name>.processor`.
fn search_dir_with(name: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(fixture_library(), dir.path().join(format!("{}.processor", name))).unwrap();
    dir
}

fn loader_for(dir: &Path) -> ProcessorLoader {
    ProcessorLoader::new(
        SearchPaths::new(vec![dir.to_path_buf()]),
        LocalProcessorFactory::builtin(),
    )
}

fn load_ctx() -> LoadContext {
    LoadContext {
        stage_index: 0,
        help_requested: false,
    }
}

#[test]
fn module_opens_and_exports_load() {
    let dir = search_dir_with("upcase");
    let module = ModuleLoader::open(dir.path().join("upcase.processor")).unwrap();
    assert!(module.path.ends_with("upcase.processor"));
}

#[test]
fn module_on_search_path_shadows_builtin() {
    let dir = search_dir_with("json");
    let loader = loader_for(dir.path());

    // The built-in json would reject an empty parameter list.
    let mut processor = loader.resolve("json", &load_ctx(), &Array::new()).unwrap();
    assert_eq!(processor.name(), "json");

    let ctx = RunContext {
        stage_count: 1,
        help_requested: false,
    };
    let mut input: Dictionary = [("greeting", "hello")].into_iter().collect();
    let mut output = Dictionary::new();
    let handoff = processor.execute(&ctx, &mut input, &mut output).unwrap();

    assert_eq!(handoff, Handoff::Produced);
    assert_eq!(output.get::<&str>("greeting"), Ok("HELLO"));
}

#[test]
fn module_load_failure_does_not_fall_back() {
    let dir = search_dir_with("json");
    let loader = loader_for(dir.path());

    // Parameters the built-in json accepts, but the module refuses.
    let parameters: Array = ["read", "stdin"].into_iter().collect();
    match loader.resolve("json", &load_ctx(), &parameters) {
        Err(LoaderError::LoadFailed { name, source }) => {
            assert_eq!(name, "json");
            assert!(matches!(source, ProcessorError::Failed(_)));
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("fell back to the built-in json"),
    }
}

#[test]
fn module_is_finalized_once_before_close() {
    let dir = search_dir_with("upcase");
    let log = dir.path().join("finalize.log");
    std::env::set_var(FINALIZE_LOG_ENV, &log);

    // Other tests finalize at stage 0; this one is told apart by its index.
    let ctx = LoadContext {
        stage_index: 42,
        help_requested: false,
    };
    let loader = loader_for(dir.path());
    let processor = loader.resolve("upcase", &ctx, &Array::new()).unwrap();
    drop(processor);

    let lines = std::fs::read_to_string(&log).unwrap();
    let finalized = lines.lines().filter(|line| *line == "finalize 42").count();
    assert_eq!(finalized, 1);
}

#[test]
fn listing_names_module_files() {
    let dir = search_dir_with("upcase");
    let listing = loader_for(dir.path()).listing();

    assert_eq!(listing.external[0].modules, vec!["upcase"]);
    assert!(listing.builtin.contains(&"json"));
}
