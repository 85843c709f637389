//! SyntaxCheck: run the language's checker against the canonical source

use puck_core::CommandSpec;
use tracing::info;

use super::{CheckOutcome, LifecycleDispatcher};
use crate::error::Result;
use crate::languages::lookup_id;
use crate::render::TemplateVars;

impl LifecycleDispatcher<'_> {
    /// Syntax-check the project named `name`
    ///
    /// Languages without a checker yield [`CheckOutcome::Unsupported`].
    pub fn syntax_check(&self, name: &str) -> Result<CheckOutcome> {
        let project = self.resolve(name)?;
        let dir = &project.dir;

        let Some((descriptor, check)) =
            lookup_id(project.language()).and_then(|d| d.check.map(|c| (d, c)))
        else {
            return Ok(CheckOutcome::Unsupported {
                language: project.language().to_string(),
            });
        };

        let source = descriptor.source_in(dir);
        let vars = TemplateVars::new(name, "", source, dir);
        let command = CommandSpec::new(check.tool)
            .args(vars.expand_all(check.args))
            .current_dir(dir)
            .capture()
            .timeout(self.config.command_timeout);

        info!("Checking {} with {}", source, check.tool);
        let output = self.runner.run(&command);

        let outcome = if output.succeeded() {
            CheckOutcome::Pass
        } else if output.is_not_found() {
            CheckOutcome::ToolMissing {
                tool: check.tool.to_string(),
                hint: check.hint.to_string(),
            }
        } else {
            let reason = output
                .output
                .as_deref()
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| output.describe());
            CheckOutcome::Fail { reason }
        };

        Ok(outcome)
    }
}
