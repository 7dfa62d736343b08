//! Typesetter that runs an external command.

use super::{PassResult, Typesetter};
use crate::error::{ReportError, Result};
use crate::template::substitute_placeholders;
use log::debug;
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

/// Default command line. `{file}` is the `.tex` file name, `{name}` its stem.
///
/// Placeholders are filled in per argument after the line is split, so the
/// substituted names are never re-parsed by the shell-words rules.
pub const DEFAULT_COMPILER_COMMAND: &str =
    "pdflatex -interaction=nonstopmode -halt-on-error {file}";

/// Runs a configured command line in the directory holding the `.tex` file.
///
/// Output of each pass is captured to `<name>.pass<N>.log` next to it.
/// Passes block until the command exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct ExternalCompiler {
    command: String,
}

impl ExternalCompiler {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for ExternalCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILER_COMMAND)
    }
}

impl Typesetter for ExternalCompiler {
    fn run_pass(&self, tex_path: &Path, pass: u8) -> Result<PassResult> {
        let fail = |message: String| ReportError::Compile { pass, message };

        let dir = match tex_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let file = tex_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| fail(format!("invalid report path '{}'", tex_path.display())))?;
        let stem = tex_path
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or(file);

        // Split before substituting so a file name with spaces stays one argument.
        let args: Vec<String> = shell_words::split(&self.command)
            .map_err(|e| {
                fail(format!(
                    "failed to parse compiler command '{}': {}\n\
                     Fix: check for unmatched quotes or invalid escape sequences.",
                    self.command, e
                ))
            })?
            .iter()
            .map(|arg| substitute_placeholders(arg, &[("file", file), ("name", stem)]))
            .collect();
        let command_str = shell_words::join(&args);
        let Some((program, program_args)) = args.split_first() else {
            return Err(fail("compiler command is empty".to_string()));
        };

        let log_path = dir.join(format!("{}.pass{}.log", stem, pass));
        let stdout_file = File::create(&log_path).map_err(|e| {
            fail(format!(
                "failed to create compiler log '{}': {}",
                log_path.display(),
                e
            ))
        })?;
        let stderr_file = stdout_file
            .try_clone()
            .map_err(|e| fail(format!("failed to open compiler log for stderr: {}", e)))?;

        debug!("Running '{}' in {}", command_str, dir.display());
        let status = Command::new(program)
            .args(program_args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout_file))
            .stderr(Stdio::from(stderr_file))
            .status()
            .map_err(|e| {
                fail(format!(
                    "failed to execute '{}': {}\n\
                     Fix: ensure the compiler is installed and in PATH.",
                    program, e
                ))
            })?;

        Ok(PassResult {
            exit_code: status.code(),
            command: command_str,
            log_path: Some(log_path),
        })
    }
}
