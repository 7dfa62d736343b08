//! Writing the report artifact and running the typesetter over it.
//!
//! LaTeX resolves the table of contents and cross-references from auxiliary
//! files written by a previous run, so the typesetter always runs exactly
//! twice. The second pass starts only after the first has exited
//! successfully; any failure aborts immediately.

mod executor;

#[cfg(test)]
mod tests;

pub use executor::{DEFAULT_COMPILER_COMMAND, ExternalCompiler};

use crate::error::{ReportError, Result};
use crate::fs::atomic_write_file;
use crate::template::RenderedReport;
use log::info;
use std::path::{Path, PathBuf};

/// Number of typesetter passes per report.
pub const PASSES: u8 = 2;

/// Number of log lines quoted in a compile error.
const LOG_TAIL_LINES: usize = 15;

/// Outcome of one typesetter pass.
#[derive(Debug, Clone)]
pub struct PassResult {
    /// Exit code of the process (None if terminated by a signal).
    pub exit_code: Option<i32>,
    /// The command line that was run, for error messages.
    pub command: String,
    /// Where the pass output was captured, if anywhere.
    pub log_path: Option<PathBuf>,
}

impl PassResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Something that can typeset a `.tex` file in place.
pub trait Typesetter {
    /// Run one pass over `tex_path`. Errors are for failures to run at all;
    /// a non-zero exit is reported through [`PassResult::exit_code`].
    fn run_pass(&self, tex_path: &Path, pass: u8) -> Result<PassResult>;
}

/// Paths produced by a successful compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledArtifact {
    pub tex_path: PathBuf,
    pub pdf_path: PathBuf,
    pub passes: u8,
}

/// File stem for an output name: trims whitespace and a trailing `.tex`.
///
/// Names must be non-empty and may not contain path separators.
pub fn artifact_stem(output_name: &str) -> Result<&str> {
    let name = output_name.trim();
    let stem = name.strip_suffix(".tex").unwrap_or(name);

    if stem.is_empty() {
        return Err(ReportError::Input("output name must not be empty".to_string()));
    }
    if stem.contains(['/', '\\']) {
        return Err(ReportError::Input(format!(
            "output name '{}' must be a plain file name; use --output-dir to choose a directory",
            output_name
        )));
    }
    Ok(stem)
}

/// Write the rendered report to `<out_dir>/<output_name>.tex`.
pub fn write_report(rendered: &RenderedReport, output_name: &str, out_dir: &Path) -> Result<PathBuf> {
    let tex_path = out_dir.join(format!("{}.tex", artifact_stem(output_name)?));
    atomic_write_file(&tex_path, rendered.as_str())?;
    info!("Wrote {}", tex_path.display());
    Ok(tex_path)
}

/// Write the report and typeset it twice.
pub fn compile(
    rendered: &RenderedReport,
    output_name: &str,
    out_dir: &Path,
    typesetter: &dyn Typesetter,
) -> Result<CompiledArtifact> {
    let tex_path = write_report(rendered, output_name, out_dir)?;

    for pass in 1..=PASSES {
        info!("Typesetting {} (pass {} of {})", tex_path.display(), pass, PASSES);
        let result = typesetter.run_pass(&tex_path, pass)?;
        if !result.is_success() {
            return Err(ReportError::Compile {
                pass,
                message: describe_failure(&result),
            });
        }
    }

    let pdf_path = tex_path.with_extension("pdf");
    Ok(CompiledArtifact {
        tex_path,
        pdf_path,
        passes: PASSES,
    })
}

fn describe_failure(result: &PassResult) -> String {
    let mut message = match result.exit_code {
        Some(code) => format!("'{}' exited with status {}", result.command, code),
        None => format!("'{}' was terminated by a signal", result.command),
    };

    if let Some(log_path) = &result.log_path {
        message.push_str(&format!("\nOutput: {}", log_path.display()));
        if let Ok(log) = std::fs::read_to_string(log_path) {
            let lines: Vec<&str> = log.lines().collect();
            let tail = &lines[lines.len().saturating_sub(LOG_TAIL_LINES)..];
            if !tail.is_empty() {
                message.push('\n');
                message.push_str(&tail.join("\n"));
            }
        }
    }

    message
}
