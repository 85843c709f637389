//! Integration tests for the project lifecycle
//!
//! These tests drive create, build/run, syntax-check, and delete end to end
//! against a temporary directory, with a mock process runner.

mod common;

use common::{snapshot, FixedAnswer, MockRunner, Workspace};
use puck_core::{InvocationOptions, ProjectMetadata, METADATA_FILE};
use puck_projects::languages::{lookup, Language, Scaffold};
use puck_projects::{
    detect, AuxiliaryStep, BuildOutcome, CheckOutcome, DeleteOutcome, DetectionSource, Error,
    StepOutcome,
};

#[test]
fn test_create_every_language() {
    let ws = Workspace::new();
    let runner = MockRunner::with_tools(&["cargo"]);
    let prompter = FixedAnswer::no();
    let dispatcher = ws.dispatcher(&runner, &prompter);

    for language in Language::all() {
        let name = format!("demo-{}", language);
        dispatcher
            .create(&name, language.as_str(), &InvocationOptions::default())
            .unwrap_or_else(|e| panic!("creating {} failed: {}", language, e));

        let dir = ws.project(&name);
        let metadata = ProjectMetadata::read(&dir).unwrap();
        assert_eq!(metadata.language, language.as_str());
        assert_eq!(metadata.name, name);
        assert!(metadata.dependencies.is_empty());

        let descriptor = lookup(*language);
        for file in descriptor.files {
            if let Scaffold::Toolchain { entry, .. } = descriptor.scaffold {
                if file.path != entry {
                    continue;
                }
            }
            let content = std::fs::read_to_string(dir.join(file.path))
                .unwrap_or_else(|_| panic!("{} is missing {}", language, file.path));
            if file.content.contains("{author}") {
                assert!(content.contains("Ada Lovelace"), "{} does not greet the author", file.path);
            }
        }
        assert!(dir.join(".gitignore").is_file());
        assert!(dir.join("README.md").is_file());
    }
}

#[test]
fn test_create_then_detect_round_trip() {
    let ws = Workspace::new();
    let runner = MockRunner::default();
    let prompter = FixedAnswer::no();

    let report = ws
        .dispatcher(&runner, &prompter)
        .create("demo", "python", &InvocationOptions::default())
        .unwrap();

    let detection = detect(&ws.project("demo")).unwrap();
    assert_eq!(detection.language, "python");
    assert_eq!(detection.source, DetectionSource::Metadata);
    assert_eq!(ProjectMetadata::read(&ws.project("demo")).unwrap(), report.metadata);
}

#[test]
fn test_detection_survives_lost_metadata() {
    let ws = Workspace::new();
    let runner = MockRunner::default();
    let prompter = FixedAnswer::no();

    ws.dispatcher(&runner, &prompter)
        .create("demo", "go", &InvocationOptions::default())
        .unwrap();
    std::fs::remove_file(ws.project("demo").join(METADATA_FILE)).unwrap();

    let detection = detect(&ws.project("demo")).unwrap();
    assert_eq!(detection.language, "go");
    assert_eq!(detection.source, DetectionSource::Signature);
}

#[test]
fn test_second_create_with_same_name_is_refused() {
    let ws = Workspace::new();
    let runner = MockRunner::with_tools(&["cargo"]);
    let prompter = FixedAnswer::no();
    let dispatcher = ws.dispatcher(&runner, &prompter);

    dispatcher
        .create("demo", "rust", &InvocationOptions::default())
        .unwrap();
    let before = snapshot(&ws.project("demo"));

    let err = dispatcher
        .create("demo", "python", &InvocationOptions::default())
        .unwrap_err();

    assert!(matches!(err, Error::ProjectExists { .. }));
    assert_eq!(snapshot(&ws.project("demo")), before);
    assert_eq!(detect(&ws.project("demo")).unwrap().language, "rust");
}

#[test]
fn test_python_venv_then_run() {
    let mut ws = Workspace::new();
    ws.config.auto_venv = true;
    let runner = MockRunner::with_tools(&["python3"]);
    let prompter = FixedAnswer::no();
    let dispatcher = ws.dispatcher(&runner, &prompter);

    let report = dispatcher
        .create("demo", "python", &InvocationOptions::default())
        .unwrap();
    assert_eq!(report.outcome(AuxiliaryStep::VirtualEnv), Some(&StepOutcome::Done));
    assert!(ws.project("demo").join(".venv").is_dir());

    let outcome = dispatcher.build_or_run("demo").unwrap();
    assert_eq!(outcome, BuildOutcome::Success);

    let run = runner.invocations().pop().unwrap();
    assert_eq!(run.program, format!("{}/.venv/bin/python", ws.project("demo")));
    assert_eq!(run.args, ["main.py"]);
    let source = std::fs::read_to_string(ws.project("demo").join("main.py")).unwrap();
    assert!(source.contains("Hello, Ada Lovelace"));
}

#[test]
fn test_check_without_checker_is_not_an_error() {
    let ws = Workspace::new();
    let runner = MockRunner::default();
    let prompter = FixedAnswer::no();
    let dispatcher = ws.dispatcher(&runner, &prompter);

    for language in ["html", "css"] {
        dispatcher
            .create(language, language, &InvocationOptions::default())
            .unwrap();
        let outcome = dispatcher.syntax_check(language).unwrap();
        assert_eq!(
            outcome,
            CheckOutcome::Unsupported {
                language: language.to_string()
            }
        );
    }
    assert!(runner.invocations().is_empty());
}

#[test]
fn test_check_reports_missing_tool() {
    let ws = Workspace::new();
    let runner = MockRunner::default();
    let prompter = FixedAnswer::no();
    let dispatcher = ws.dispatcher(&runner, &prompter);

    dispatcher
        .create("demo", "java", &InvocationOptions::default())
        .unwrap();

    let outcome = dispatcher.syntax_check("demo").unwrap();
    assert!(matches!(outcome, CheckOutcome::ToolMissing { ref tool, .. } if tool == "javac"));
}

#[test]
fn test_delete_refuses_unsafe_targets_under_any_config() {
    for force in [false, true] {
        let mut ws = Workspace::new();
        ws.config.delete_force = force;
        std::fs::write(ws.cwd().join("keep.txt"), "keep").unwrap();
        let parent = ws.cwd().parent().unwrap().to_path_buf();
        let before = snapshot(&parent);

        let runner = MockRunner::default();
        let prompter = FixedAnswer::yes();
        let dispatcher = ws.dispatcher(&runner, &prompter);

        for name in ["", "/", ".", ".."] {
            let err = dispatcher.delete(name).unwrap_err();
            assert!(matches!(err, Error::UnsafeDeleteTarget { .. }));
        }

        assert_eq!(prompter.asked(), 0);
        assert_eq!(snapshot(&parent), before);
    }
}

#[test]
fn test_force_delete_never_prompts() {
    let mut ws = Workspace::new();
    ws.config.delete_force = true;
    std::fs::create_dir(ws.project("empty")).unwrap();
    let runner = MockRunner::default();
    let prompter = FixedAnswer::no();

    let outcome = ws.dispatcher(&runner, &prompter).delete("empty").unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(prompter.asked(), 0);
    assert!(!ws.project("empty").exists());
}

#[test]
fn test_create_and_delete_cycle() {
    let ws = Workspace::new();
    let runner = MockRunner::default();
    let prompter = FixedAnswer::yes();
    let dispatcher = ws.dispatcher(&runner, &prompter);

    dispatcher
        .create("demo", "c", &InvocationOptions::default())
        .unwrap();
    assert_eq!(dispatcher.delete("demo").unwrap(), DeleteOutcome::Deleted);
    assert_eq!(prompter.asked(), 1);
    assert!(!ws.project("demo").exists());

    assert!(matches!(dispatcher.delete("demo"), Err(Error::ProjectNotFound { .. })));
}

#[test]
fn test_build_unknown_project() {
    let ws = Workspace::new();
    let runner = MockRunner::default();
    let prompter = FixedAnswer::no();

    let err = ws.dispatcher(&runner, &prompter).build_or_run("ghost").unwrap_err();
    assert!(matches!(err, Error::NoProjectDescriptor { .. }));
    assert!(runner.invocations().is_empty());
}
