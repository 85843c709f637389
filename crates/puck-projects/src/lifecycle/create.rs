//! Create: scaffold a new project

use camino::Utf8Path;
use puck_core::{CommandSpec, InvocationOptions, ProjectMetadata};
use tracing::{debug, info, warn};

use super::{
    is_plain_name, AuxiliaryReport, AuxiliaryStep, CreateReport, LifecycleDispatcher, StepOutcome,
};
use crate::error::{Error, Result};
use crate::git;
use crate::languages::registry::GENERIC_GITIGNORE;
use crate::languages::{lookup, Cheatsheet, Language, LanguageDescriptor, Scaffold};
use crate::render::{Quoting, TemplateVars};

/// Directory name of the python virtual environment
pub(crate) const VENV_DIR: &str = ".venv";

/// Human-readable info file
const INFO_FILE: &str = "README.md";

const INFO_TEMPLATE: &str = "# {name}

- Language: {language}
- Author: {author}
- Created: {created}

Build and run with `puck {name} b`, check syntax with `puck {name} s`.
";

impl LifecycleDispatcher<'_> {
    /// Create a new project named `name` in the working directory
    ///
    /// Fails without touching the filesystem when the language is unknown,
    /// the name is not a plain directory name, or the project already exists.
    pub fn create(
        &self,
        name: &str,
        language: &str,
        options: &InvocationOptions,
    ) -> Result<CreateReport> {
        let language = Language::from_str_with_aliases(language)
            .ok_or_else(|| Error::unknown_language(language, Language::available()))?;

        if !is_plain_name(Utf8Path::new(name)) {
            return Err(Error::invalid_project_name(name));
        }

        let project_dir = self.paths.project_dir(name);
        if project_dir.symlink_metadata().is_ok() {
            return Err(Error::project_exists(project_dir.as_str()));
        }

        let descriptor = lookup(language);
        let author = self.resolve_author();
        info!("Creating {} project {} at {}", descriptor.name, name, project_dir);

        let metadata = match self.write_core_files(descriptor, name, &author, &project_dir) {
            Ok(metadata) => metadata,
            Err(e) => {
                self.roll_back(&project_dir);
                return Err(e);
            }
        };

        let mut auxiliary = Vec::new();
        if language == Language::Python {
            auxiliary.push(self.create_venv(&project_dir));
        }
        auxiliary.push(self.copy_cheatsheets(descriptor, &project_dir, options));
        auxiliary.push(self.write_dockerfile(descriptor, name, &author, &project_dir, options));
        auxiliary.push(self.init_git(&project_dir, options));

        for report in &auxiliary {
            if let StepOutcome::Failed(reason) = &report.outcome {
                warn!("{} step failed: {}", report.step, reason);
            }
        }

        Ok(CreateReport {
            project_dir,
            metadata,
            auxiliary,
        })
    }

    /// Author for boilerplate and metadata: config, then git, then the login name
    pub fn resolve_author(&self) -> String {
        if let Some(author) = &self.config.author {
            return author.clone();
        }
        if let Some(author) = git::user_name(self.runner) {
            return author;
        }
        ["USER", "USERNAME"]
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Core steps: directory, boilerplate, .gitignore, info file, metadata
    fn write_core_files(
        &self,
        descriptor: &LanguageDescriptor,
        name: &str,
        author: &str,
        project_dir: &Utf8Path,
    ) -> Result<ProjectMetadata> {
        let vars = TemplateVars::new(name, author, descriptor.canonical_source(), project_dir);

        match descriptor.scaffold {
            Scaffold::Direct => {
                std::fs::create_dir(project_dir)?;
                for file in descriptor.files {
                    write_file(project_dir, file.path, &vars.render(file.content, file.quoting))?;
                }
            }
            Scaffold::Toolchain { init, entry } => {
                let command = CommandSpec::new(vars.expand(init[0]))
                    .args(vars.expand_all(&init[1..]))
                    .current_dir(self.paths.cwd.clone())
                    .capture()
                    .timeout(self.config.command_timeout);
                let output = self.runner.run(&command);
                if !output.succeeded() {
                    let message = if output.is_not_found() {
                        format!("{} not found. {}", command.program, descriptor.build.hint)
                    } else {
                        format!("`{}` failed: {}", command, output.describe())
                    };
                    return Err(Error::scaffold_failed(descriptor.language.as_str(), message));
                }

                // the initializer's own entry point is replaced by ours
                for file in descriptor.files.iter().filter(|f| f.path == entry) {
                    write_file(project_dir, file.path, &vars.render(file.content, file.quoting))?;
                }
            }
        }

        let gitignore = descriptor.gitignore.unwrap_or(GENERIC_GITIGNORE);
        write_file(project_dir, ".gitignore", gitignore)?;

        let metadata = ProjectMetadata::new(name, descriptor.language.as_str(), author);

        let info = INFO_TEMPLATE
            .replace("{language}", descriptor.name)
            .replace("{created}", &metadata.created_at);
        write_file(project_dir, INFO_FILE, &vars.render(&info, Quoting::Plain))?;

        metadata.write(project_dir)?;
        debug!("Wrote {} core files for {}", descriptor.name, name);

        Ok(metadata)
    }

    fn roll_back(&self, project_dir: &Utf8Path) {
        if project_dir.exists() {
            if let Err(e) = std::fs::remove_dir_all(project_dir) {
                warn!("Could not remove partial project {}: {}", project_dir, e);
            }
        }
    }

    fn create_venv(&self, project_dir: &Utf8Path) -> AuxiliaryReport {
        let outcome = if !self.config.auto_venv {
            StepOutcome::Skipped("auto_venv is disabled".to_string())
        } else {
            let command = CommandSpec::new("python3")
                .args(["-m", "venv", VENV_DIR])
                .current_dir(project_dir)
                .capture()
                .timeout(self.config.command_timeout);
            let output = self.runner.run(&command);
            if output.succeeded() {
                StepOutcome::Done
            } else {
                StepOutcome::Failed(format!("`{}` failed: {}", command, output.describe()))
            }
        };

        AuxiliaryReport {
            step: AuxiliaryStep::VirtualEnv,
            outcome,
        }
    }

    fn copy_cheatsheets(
        &self,
        descriptor: &LanguageDescriptor,
        project_dir: &Utf8Path,
        options: &InvocationOptions,
    ) -> AuxiliaryReport {
        let outcome = if !options.copy_cheatsheet(self.config) {
            StepOutcome::Skipped("cheatsheets disabled".to_string())
        } else {
            match copy_cheatsheet_files(&self.paths.cheatsheet_dir(), descriptor.cheatsheet, project_dir) {
                Ok(copied) => {
                    debug!("Copied {} cheatsheet file(s)", copied);
                    StepOutcome::Done
                }
                Err(reason) => StepOutcome::Failed(reason),
            }
        };

        AuxiliaryReport {
            step: AuxiliaryStep::Cheatsheet,
            outcome,
        }
    }

    fn write_dockerfile(
        &self,
        descriptor: &LanguageDescriptor,
        name: &str,
        author: &str,
        project_dir: &Utf8Path,
        options: &InvocationOptions,
    ) -> AuxiliaryReport {
        let outcome = if !options.init_docker(self.config) {
            StepOutcome::Skipped("docker disabled".to_string())
        } else if let Some(template) = descriptor.docker {
            let vars = TemplateVars::new(name, author, descriptor.canonical_source(), project_dir);
            match write_file(project_dir, crate::docker::DOCKERFILE, &vars.render(template, Quoting::Plain)) {
                Ok(()) => StepOutcome::Done,
                Err(e) => StepOutcome::Failed(e.to_string()),
            }
        } else {
            StepOutcome::Skipped(format!("no Dockerfile template for {}", descriptor.name))
        };

        AuxiliaryReport {
            step: AuxiliaryStep::Dockerfile,
            outcome,
        }
    }

    fn init_git(&self, project_dir: &Utf8Path, options: &InvocationOptions) -> AuxiliaryReport {
        let outcome = if !options.init_git(self.config) {
            StepOutcome::Skipped("git disabled".to_string())
        } else {
            match git::init_repository(self.runner, project_dir) {
                Ok(()) => StepOutcome::Done,
                Err(reason) => StepOutcome::Failed(reason),
            }
        };

        AuxiliaryReport {
            step: AuxiliaryStep::Git,
            outcome,
        }
    }
}

/// Copy the language's cheatsheet file(s) into the project
///
/// Returns the number of files copied, or why nothing was.
fn copy_cheatsheet_files(
    source_dir: &Utf8Path,
    rule: Cheatsheet,
    project_dir: &Utf8Path,
) -> std::result::Result<usize, String> {
    let files: Vec<_> = match rule {
        Cheatsheet::Single(file) => {
            let path = source_dir.join(file);
            if !path.is_file() {
                return Err(format!("cheatsheet not found: {}", path));
            }
            vec![path]
        }
        Cheatsheet::Prefixed(prefix) => {
            let pattern = format!("{}/{}*", glob::Pattern::escape(source_dir.as_str()), prefix);
            let matches: Vec<_> = glob::glob(&pattern)
                .map_err(|e| e.to_string())?
                .flatten()
                .filter(|p| p.is_file())
                .filter_map(|p| camino::Utf8PathBuf::from_path_buf(p).ok())
                .collect();
            if matches.is_empty() {
                return Err(format!("no cheatsheets matching {}", pattern));
            }
            matches
        }
    };

    for file in &files {
        let Some(file_name) = file.file_name() else {
            continue;
        };
        std::fs::copy(file, project_dir.join(file_name))
            .map_err(|e| format!("copying {} failed: {}", file, e))?;
    }

    Ok(files.len())
}

/// Write a file relative to the project root, creating parent directories
fn write_file(project_dir: &Utf8Path, rel: &str, content: &str) -> Result<()> {
    let path = project_dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;
    Ok(())
}
