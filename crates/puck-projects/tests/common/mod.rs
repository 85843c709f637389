//! Common test utilities for puck-projects
//!
//! - A recording process runner that never spawns anything
//! - Prompters with fixed answers
//! - Temporary working/installation directory fixtures

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use puck_core::{CommandSpec, Config, Paths, ProcessRunner, Prompter, RunOutput, RunStatus};
use puck_projects::LifecycleDispatcher;
use tempfile::TempDir;

/// Mock runner: tools in `available` succeed, everything else is missing
///
/// `python3 -m venv <dir>` materializes `<dir>/bin/python` so later
/// toolchain selection sees the environment.
#[derive(Default)]
pub struct MockRunner {
    available: HashSet<String>,
    invocations: Mutex<Vec<CommandSpec>>,
}

impl MockRunner {
    pub fn with_tools(tools: &[&str]) -> Self {
        Self {
            available: tools.iter().map(|t| t.to_string()).collect(),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> Vec<CommandSpec> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.invocations().iter().map(|c| c.to_string()).collect()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, command: &CommandSpec) -> RunOutput {
        self.invocations.lock().unwrap().push(command.clone());

        if !command.program.starts_with('/') && !self.is_available(&command.program) {
            return RunOutput::new(RunStatus::NotFound);
        }

        if let [flag, module, venv] = command.args.as_slice() {
            if flag == "-m" && module == "venv" {
                let cwd = command.cwd.clone().unwrap_or_default();
                let bin = cwd.join(venv).join("bin");
                std::fs::create_dir_all(&bin).unwrap();
                std::fs::write(bin.join("python"), "").unwrap();
            }
        }

        RunOutput::new(RunStatus::Exited(0)).with_output("")
    }

    fn is_available(&self, program: &str) -> bool {
        self.available.contains(program)
    }
}

/// Prompter with a fixed answer that counts how often it was asked
pub struct FixedAnswer {
    yes: bool,
    asked: AtomicUsize,
}

impl FixedAnswer {
    pub fn yes() -> Self {
        Self {
            yes: true,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn no() -> Self {
        Self {
            yes: false,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Prompter for FixedAnswer {
    fn confirm(&self, _question: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.yes
    }
}

/// A working directory and an installation root under one temp dir
pub struct Workspace {
    _temp: TempDir,
    pub paths: Paths,
    pub config: Config,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let cwd = root.join("work");
        let install = root.join("install");
        std::fs::create_dir_all(&cwd).unwrap();
        std::fs::create_dir_all(install.join("cheatsheets")).unwrap();

        Self {
            _temp: temp,
            paths: Paths::new(cwd, install),
            config: Config {
                author: Some("Ada Lovelace".to_string()),
                copy_cheatsheet: false,
                auto_venv: false,
                ..Config::default()
            },
        }
    }

    pub fn cwd(&self) -> &Utf8Path {
        &self.paths.cwd
    }

    pub fn project(&self, name: &str) -> Utf8PathBuf {
        self.cwd().join(name)
    }

    pub fn dispatcher<'a>(
        &'a self,
        runner: &'a MockRunner,
        prompter: &'a FixedAnswer,
    ) -> LifecycleDispatcher<'a> {
        LifecycleDispatcher::new(&self.config, &self.paths, runner, prompter)
    }
}

/// Every file path under `dir`, relative and sorted
pub fn snapshot(dir: &Utf8Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<_> = walkdir::WalkDir::new(dir)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(dir).unwrap().to_string_lossy().to_string();
            (rel, std::fs::read(e.path()).unwrap())
        })
        .collect();
    files.sort();
    files
}
