//! Build-Run: build and execute a project

use camino::Utf8Path;
use puck_core::CommandSpec;
use tracing::{debug, info, warn};

use super::{BuildOutcome, LifecycleDispatcher};
use crate::docker;
use crate::error::Result;
use crate::languages::{lookup_id, Language, LanguageDescriptor, Toolchain};
use crate::render::TemplateVars;

impl LifecycleDispatcher<'_> {
    /// Build and run the project named `name`
    ///
    /// A project carrying a Dockerfile runs in a container when
    /// `use_docker_run` is enabled; otherwise the first available toolchain
    /// is used. Missing tools and failed commands are outcomes, not errors.
    pub fn build_or_run(&self, name: &str) -> Result<BuildOutcome> {
        let project = self.resolve(name)?;
        let dir = &project.dir;

        if self.config.use_docker_run && dir.join(docker::DOCKERFILE).is_file() {
            if let Some(outcome) =
                docker::build_and_run(self.runner, dir, name, self.config.command_timeout)
            {
                return Ok(outcome);
            }
        }

        let Some(descriptor) = lookup_id(project.language()) else {
            return Ok(BuildOutcome::NoBuilder {
                language: project.language().to_string(),
            });
        };

        let toolchain = match self.select_toolchain(descriptor, dir) {
            Some(toolchain) => toolchain,
            None => match self.apply_remedy(descriptor, dir) {
                Some(toolchain) => toolchain,
                None => {
                    return Ok(BuildOutcome::ToolMissing {
                        tool: installable_tools(descriptor),
                        hint: descriptor.build.hint.to_string(),
                    })
                }
            },
        };
        info!("Building {} with {}", name, toolchain.tool);

        if let Some(output_dir) = descriptor.build.output_dir {
            std::fs::create_dir_all(dir.join(output_dir))?;
        }

        let vars = TemplateVars::new(name, "", descriptor.source_in(dir), dir);
        for step in toolchain.steps {
            if let Some(outcome) = self.run_step(&vars, step, dir, descriptor) {
                return Ok(outcome);
            }
        }

        if let Some(run) = descriptor.build.run {
            if descriptor.language == Language::Assembly && !self.config.assembly_build {
                info!("assembly_build is disabled, not running {}", name);
                return Ok(BuildOutcome::Success);
            }
            if let Some(outcome) = self.run_step(&vars, run, dir, descriptor) {
                return Ok(outcome);
            }
        }

        Ok(BuildOutcome::Success)
    }

    /// First toolchain whose tool is present
    fn select_toolchain(
        &self,
        descriptor: &'static LanguageDescriptor,
        dir: &Utf8Path,
    ) -> Option<&'static Toolchain> {
        descriptor.build.toolchains.iter().find(|toolchain| {
            let available = if toolchain.tool.contains('/') {
                dir.join(toolchain.tool).is_file()
            } else {
                self.runner.is_available(toolchain.tool)
            };
            debug!("Toolchain {} available: {}", toolchain.tool, available);
            available
        })
    }

    /// Run the language's install command once, then select again
    fn apply_remedy(
        &self,
        descriptor: &'static LanguageDescriptor,
        dir: &Utf8Path,
    ) -> Option<&'static Toolchain> {
        let remedy = descriptor.build.remedy?;
        let command = CommandSpec::new(remedy[0])
            .args(remedy[1..].iter().copied())
            .current_dir(dir)
            .timeout(self.config.command_timeout);

        info!("No {} toolchain found, trying `{}`", descriptor.name, command);
        let output = self.runner.run(&command);
        if !output.succeeded() {
            warn!("`{}` failed: {}", command, output.describe());
            return None;
        }
        self.select_toolchain(descriptor, dir)
    }

    /// Run one command inside the project; `Some` stops the build
    fn run_step(
        &self,
        vars: &TemplateVars<'_>,
        template: &[&str],
        dir: &Utf8Path,
        descriptor: &LanguageDescriptor,
    ) -> Option<BuildOutcome> {
        let command = CommandSpec::new(vars.expand(template[0]))
            .args(vars.expand_all(&template[1..]))
            .current_dir(dir)
            .timeout(self.config.command_timeout);

        let output = self.runner.run(&command);
        if output.succeeded() {
            None
        } else if output.is_not_found() {
            Some(BuildOutcome::ToolMissing {
                tool: command.program,
                hint: descriptor.build.hint.to_string(),
            })
        } else {
            Some(BuildOutcome::BuildFailed {
                reason: output.describe(),
                command: command.to_string(),
            })
        }
    }
}

/// Tools the user can install, naming every toolchain looked up on PATH
///
/// Project-local tools such as a virtual environment interpreter are left
/// out since no installer provides them.
fn installable_tools(descriptor: &LanguageDescriptor) -> String {
    let tools: Vec<&str> = descriptor
        .build
        .toolchains
        .iter()
        .map(|toolchain| toolchain.tool)
        .filter(|tool| !tool.contains('/'))
        .collect();
    match tools.as_slice() {
        [] => descriptor.name.to_string(),
        tools => tools.join(" or "),
    }
}
