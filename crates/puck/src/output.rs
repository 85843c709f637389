//! Terminal output for command results
//!
//! Results go to stdout and problems to stderr, each as one marked line,
//! so `puck ... 2>/dev/null` keeps only what succeeded.

use std::time::Duration;

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};

/// Kind of status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    fn marker(self) -> StyledObject<&'static str> {
        match self {
            Level::Success => style("✓").green().bold(),
            Level::Info => style("ℹ").blue().bold(),
            Level::Warning => style("⚠").yellow().bold(),
            Level::Error => style("✗").red().bold(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

fn status_line(level: Level, msg: &str) -> String {
    format!("{} {}", level.marker(), msg)
}

fn emit(level: Level, msg: &str) {
    let line = status_line(level, msg);
    if level.to_stderr() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn success(msg: &str) {
    emit(Level::Success, msg);
}

pub fn info(msg: &str) {
    emit(Level::Info, msg);
}

pub fn warning(msg: &str) {
    emit(Level::Warning, msg);
}

pub fn error(msg: &str) {
    emit(Level::Error, msg);
}

/// Indented detail line under a success message
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Run `work` behind a spinner, clearing it before any result is printed
///
/// Used for steps whose child process output is captured, so the terminal
/// would otherwise sit silent.
pub fn while_running<T>(msg: &str, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    let template = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(template.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = work();
    spinner.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problems_go_to_stderr() {
        assert!(Level::Warning.to_stderr());
        assert!(Level::Error.to_stderr());
        assert!(!Level::Success.to_stderr());
        assert!(!Level::Info.to_stderr());
    }

    #[test]
    fn test_status_line_keeps_message() {
        console::set_colors_enabled(false);
        assert_eq!(status_line(Level::Success, "Created demo"), "✓ Created demo");
        assert_eq!(status_line(Level::Error, "boom"), "✗ boom");
    }

    #[test]
    fn test_while_running_returns_result() {
        assert_eq!(while_running("Working...", || 42), 42);
    }
}
