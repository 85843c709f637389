//! External process execution
//!
//! Every external call (tool probing, compilation, virtualenv creation,
//! docker, git) goes through [`ProcessRunner`]. Commands are argument
//! vectors, never shell strings. Execution is synchronous; the only
//! safety margin is an optional per-call timeout.

use std::fmt;
use std::io;
use std::time::{Duration, Instant};

use camino::Utf8PathBuf;
use tracing::{debug, warn};

/// Timeout for quick probes such as `git config user.name`
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// A single external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable name or path
    pub program: String,
    /// Arguments, passed through untouched
    pub args: Vec<String>,
    /// Working directory for the child
    pub cwd: Option<Utf8PathBuf>,
    /// Capture stdout+stderr instead of inheriting the terminal
    pub capture: bool,
    /// Kill the child after this long
    pub timeout: Option<Duration>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            capture: false,
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn capture(mut self) -> Self {
        self.capture = true;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a command ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// Process exited with this code
    Exited(i32),
    /// Process was terminated by a signal
    Signaled,
    /// Executable was not found
    NotFound,
    /// Killed after exceeding its timeout
    TimedOut,
    /// Could not be started or waited on
    SpawnFailed(String),
}

/// Result of running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub status: RunStatus,
    /// Combined stdout and stderr when the command was captured
    pub output: Option<String>,
}

impl RunOutput {
    pub fn new(status: RunStatus) -> Self {
        Self {
            status,
            output: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Exited with status zero
    pub fn succeeded(&self) -> bool {
        self.status == RunStatus::Exited(0)
    }

    /// The executable does not exist
    pub fn is_not_found(&self) -> bool {
        self.status == RunStatus::NotFound
    }

    /// Short description of a failure, for diagnostics
    pub fn describe(&self) -> String {
        match &self.status {
            RunStatus::Exited(code) => format!("exit code {}", code),
            RunStatus::Signaled => "terminated by signal".to_string(),
            RunStatus::NotFound => "command not found".to_string(),
            RunStatus::TimedOut => "timed out".to_string(),
            RunStatus::SpawnFailed(e) => e.clone(),
        }
    }
}

/// Boundary to the operating system's process layer
pub trait ProcessRunner {
    /// Run a command to completion
    fn run(&self, command: &CommandSpec) -> RunOutput;

    /// Whether an executable is on PATH
    fn is_available(&self, program: &str) -> bool;
}

/// Runs real processes via duct
#[derive(Debug, Clone)]
pub struct SystemRunner {
    poll_interval: Duration,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self {
            poll_interval: Duration::from_millis(50),
        }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> RunOutput {
        debug!("Running: {}", command);

        let mut expr = duct::cmd(command.program.as_str(), command.args.iter()).unchecked();
        if let Some(dir) = &command.cwd {
            expr = expr.dir(dir.as_std_path());
        }
        if command.capture {
            expr = expr.stdin_null().stderr_to_stdout().stdout_capture();
        }

        let handle = match expr.start() {
            Ok(handle) => handle,
            Err(e) if e.kind() == io::ErrorKind::NotFound || !self.is_available(&command.program) => {
                debug!("Command not found: {}", command.program);
                return RunOutput::new(RunStatus::NotFound);
            }
            Err(e) => return RunOutput::new(RunStatus::SpawnFailed(e.to_string())),
        };

        let finished = match command.timeout {
            Some(timeout) => wait_with_timeout(&handle, timeout, self.poll_interval),
            None => handle.wait().map(Some),
        };

        match finished {
            Ok(Some(output)) => {
                let status = match output.status.code() {
                    Some(code) => RunStatus::Exited(code),
                    None => RunStatus::Signaled,
                };
                let mut result = RunOutput::new(status);
                if command.capture {
                    result.output = Some(String::from_utf8_lossy(&output.stdout).into_owned());
                }
                debug!("{} finished: {}", command.program, result.describe());
                result
            }
            Ok(None) => {
                warn!("Command timed out: {}", command);
                RunOutput::new(RunStatus::TimedOut)
            }
            Err(e) => RunOutput::new(RunStatus::SpawnFailed(e.to_string())),
        }
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Poll until the child exits or the deadline passes; kill it on expiry
fn wait_with_timeout(
    handle: &duct::Handle,
    timeout: Duration,
    poll_interval: Duration,
) -> io::Result<Option<&std::process::Output>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(output) = handle.try_wait()? {
            return Ok(Some(output));
        }
        if Instant::now() >= deadline {
            handle.kill()?;
            return Ok(None);
        }
        std::thread::sleep(poll_interval);
    }
}
