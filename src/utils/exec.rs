//! External command execution utilities.
//!
//! Provides a Builder-based API for running external tools (source
//! formatters) with captured output.
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! // From a configured command array
//! Cmd::from_slice(&config.mapping.formatter).arg(&target).run()?;
//! ```

use crate::log;
use anyhow::{Context, Result};
use regex::Regex;
use std::{
    ffi::{OsStr, OsString},
    io,
    path::PathBuf,
    process::{Command, Output, Stdio},
    sync::OnceLock,
};

// ============================================================================
// Builder API
// ============================================================================

/// Command builder for external process execution.
#[derive(Debug, Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
}

impl Cmd {
    /// Create from a command array (e.g., `["gofmt", "-w"]`).
    pub fn from_slice<S: AsRef<OsStr>>(cmd: &[S]) -> Self {
        let mut iter = cmd.iter();
        let program = iter
            .next()
            .map(|s| s.as_ref().to_owned())
            .unwrap_or_default();
        let args = iter.map(|s| s.as_ref().to_owned()).collect();
        Self { program, args }
    }

    /// Add a single argument. Empty arguments are dropped.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        let arg = arg.as_ref();
        if !arg.is_empty() {
            self.args.push(arg.to_owned());
        }
        self
    }

    /// Get the program name for error messages.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    /// Locate the program on `PATH`.
    pub fn resolve(&self) -> Result<PathBuf, which::Error> {
        which::which(&self.program)
    }

    /// Spawn the command and wait, capturing stdout and stderr in full.
    ///
    /// The exit status is not checked.
    fn output(&self) -> io::Result<Output> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
    }

    /// Execute the command, failing on a non-zero exit.
    ///
    /// Stderr of a successful run is logged under the program name.
    pub fn run(self) -> Result<Output> {
        let name = self.program_name();

        let output = self
            .output()
            .with_context(|| format!("Failed to execute `{name}`"))?;

        if !output.status.success() {
            anyhow::bail!(format_error(&name, &output));
        }

        let lines = stderr_lines(&output);
        if !lines.is_empty() {
            log!(&name; "{}", lines.join("\n"));
        }
        Ok(output)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Non-empty stderr lines with ANSI codes removed.
fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .map(|line| strip_ansi(line).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Strip ANSI escape codes from string.
fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());
    re.replace_all(s, "")
}

/// Format error message for failed command.
fn format_error(name: &str, output: &Output) -> String {
    let mut msg = format!("Command `{name}` failed with {}", output.status);

    let stderr = stderr_lines(output);
    if !stderr.is_empty() {
        msg.push('\n');
        msg.push_str(&stderr.join("\n"));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stdout = stdout.trim();
    if !stdout.is_empty() {
        msg.push_str("\nStdout:\n");
        msg.push_str(stdout);
    }
    msg
}

// ============================================================================
// Tests
// ============================================================================
